//! Spec for `leaguegamefinder`, team mode, one season.
//!
//! Result set `LeagueGameFinderResults`: one row per team per game, newest
//! first. Columns used: SEASON_ID, TEAM_ID, TEAM_ABBREVIATION, TEAM_NAME,
//! GAME_ID, GAME_DATE, MATCHUP, WL, PTS, PLUS_MINUS.

use crate::core::{StatsClient, StatsResponse, table::{cell_f64, cell_i64, cell_str}};
use crate::error::Result;
use crate::model::{GameRecord, Outcome};
use crate::seasons::Season;

pub const ENDPOINT: &str = "leaguegamefinder";
pub const RESULT_SET: &str = "LeagueGameFinderResults";

pub fn params(client: &StatsClient, season: Season) -> Vec<(&'static str, String)> {
    vec![
        ("PlayerOrTeam", s!("T")),
        ("LeagueID", s!(client.league_id())),
        ("Season", season.to_string()),
        ("SeasonType", s!()),
        ("TeamID", s!()),
        ("VsTeamID", s!()),
        ("DateFrom", s!()),
        ("DateTo", s!()),
    ]
}

pub fn fetch(client: &StatsClient, season: Season) -> Result<Vec<GameRecord>> {
    let doc = client.get(ENDPOINT, &params(client, season))?;
    parse_doc(&doc)
}

pub fn parse_doc(doc: &StatsResponse) -> Result<Vec<GameRecord>> {
    // Older payloads name the set differently; fall back to the first one.
    let t = match doc.table(RESULT_SET) {
        Ok(t) => t,
        Err(e) => doc.tables().first().ok_or(e)?,
    };

    let game_id = t.column("GAME_ID")?;
    let matchup = t.column("MATCHUP")?;
    let game_date = t.column("GAME_DATE")?;
    let season_id = t.optional_column("SEASON_ID");
    let team_id = t.optional_column("TEAM_ID");
    let team_abbr = t.optional_column("TEAM_ABBREVIATION");
    let team_name = t.optional_column("TEAM_NAME");
    let wl = t.optional_column("WL");
    let pts = t.optional_column("PTS");
    let plus_minus = t.optional_column("PLUS_MINUS");

    let text = |row: &[serde_json::Value], ix: Option<usize>| {
        ix.and_then(|c| cell_str(row, c)).unwrap_or_default()
    };

    let mut out = Vec::with_capacity(t.row_count());
    for row in &t.rows {
        let (Some(gid), Some(m)) = (cell_str(row, game_id), cell_str(row, matchup)) else {
            logd!("Games: skipping row without GAME_ID/MATCHUP: {:?}", row);
            continue;
        };
        // Missing TEAM_ID reads as 0; a negative one means a broken row.
        let Ok(tid) = u64::try_from(team_id.and_then(|c| cell_i64(row, c)).unwrap_or(0)) else {
            logd!("Games: skipping row with negative TEAM_ID: {:?}", row);
            continue;
        };
        out.push(GameRecord {
            season_id: text(row, season_id),
            team_id: tid,
            team_abbreviation: text(row, team_abbr),
            team_name: text(row, team_name),
            game_id: gid,
            game_date: cell_str(row, game_date).unwrap_or_default(),
            matchup: m,
            outcome: wl.and_then(|c| cell_str(row, c)).and_then(|s| Outcome::parse(&s)),
            points: pts.and_then(|c| cell_i64(row, c)),
            plus_minus: plus_minus.and_then(|c| cell_f64(row, c)),
        });
    }
    Ok(out)
}
