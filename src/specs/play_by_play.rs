//! Spec for `playbyplayv2`, one game.
//!
//! Result set `PlayByPlay`. Columns used: EVENTNUM, PERIOD, PCTIMESTRING,
//! SCORE, HOMEDESCRIPTION, NEUTRALDESCRIPTION, VISITORDESCRIPTION.
//! SCORE is only filled on scoring plays.

use crate::core::{StatsClient, StatsResponse, table::{cell_i64, cell_str}};
use crate::error::Result;
use crate::model::PlayEvent;

pub const ENDPOINT: &str = "playbyplayv2";
pub const RESULT_SET: &str = "PlayByPlay";

pub fn params(game_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("GameID", s!(game_id)),
        ("StartPeriod", s!("0")),
        ("EndPeriod", s!("0")),
    ]
}

pub fn fetch(client: &StatsClient, game_id: &str) -> Result<Vec<PlayEvent>> {
    let doc = client.get(ENDPOINT, &params(game_id))?;
    parse_doc(&doc)
}

pub fn parse_doc(doc: &StatsResponse) -> Result<Vec<PlayEvent>> {
    let t = doc.table(RESULT_SET)?;
    let event_num = t.column("EVENTNUM")?;
    let period = t.column("PERIOD")?;
    let clock = t.optional_column("PCTIMESTRING");
    let score = t.optional_column("SCORE");
    let home = t.optional_column("HOMEDESCRIPTION");
    let neutral = t.optional_column("NEUTRALDESCRIPTION");
    let visitor = t.optional_column("VISITORDESCRIPTION");

    let text = |row: &[serde_json::Value], ix: Option<usize>| ix.and_then(|c| cell_str(row, c));

    Ok(t.rows
        .iter()
        .map(|row| PlayEvent {
            event_num: cell_i64(row, event_num).unwrap_or(0),
            period: cell_i64(row, period).unwrap_or(0),
            clock: text(row, clock).unwrap_or_default(),
            score: text(row, score),
            home_description: text(row, home),
            neutral_description: text(row, neutral),
            visitor_description: text(row, visitor),
        })
        .collect())
}
