// src/matchups.rs
//
// Head-to-head lookup. The season log has no structured opponent field that
// we trust, so pairing is done on the MATCHUP text, which is exactly
// "AAA vs. BBB" (AAA at home) or "AAA @ BBB" (AAA away). Anything else
// (neutral sites, exhibition labels) never matches.

use crate::{
    core::StatsClient,
    error::Result,
    model::GameRecord,
    progress::Progress,
    seasons::Season,
    specs::game_finder,
};

/// The four accepted spellings for the pair, lowercased.
pub fn matchup_variants(a: &str, b: &str) -> [String; 4] {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    [
        join!(&a, " vs. ", &b),
        join!(&a, " @ ", &b),
        join!(&b, " vs. ", &a),
        join!(&b, " @ ", &a),
    ]
}

/// Case-insensitive exact match against precomputed variants.
fn matches_any(variants: &[String; 4], matchup: &str) -> bool {
    let m = matchup.to_lowercase();
    variants.iter().any(|v| *v == m)
}

/// Keep the rows played between `a` and `b`, in input order.
/// Symmetric in `a`/`b`; no match is an empty vec.
pub fn filter_matchups(games: &[GameRecord], a: &str, b: &str) -> Vec<GameRecord> {
    let variants = matchup_variants(a, b);
    games
        .iter()
        .filter(|g| matches_any(&variants, &g.matchup))
        .cloned()
        .collect()
}

/// One entry per distinct game id, first row wins. The log lists each game
/// once per team; menus only need it once.
pub fn distinct_games(games: &[GameRecord]) -> Vec<&GameRecord> {
    let mut seen = std::collections::HashSet::new();
    games.iter().filter(|g| seen.insert(g.game_id.as_str())).collect()
}

/// Fetch the season log and keep the games between `a` and `b`.
pub fn find_matchups(
    client: &StatsClient,
    season: Season,
    a: &str,
    b: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<GameRecord>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(1);
        p.log(&format!("Fetching {season} game log…"));
    }

    let games = game_finder::fetch(client, season);

    if let Some(p) = progress.as_deref_mut() {
        if games.is_ok() {
            p.step_done("game log");
        }
        p.finish();
    }

    let games = games?;
    let found = filter_matchups(&games, a, b);
    logf!(
        "Matchups: {} vs {} in {}: {} of {} rows",
        a, b, season, found.len(), games.len()
    );
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(id: &str, matchup: &str) -> GameRecord {
        GameRecord {
            season_id: s!("22022"),
            team_id: 0,
            team_abbreviation: s!(&matchup[..3]),
            team_name: s!(),
            game_id: s!(id),
            game_date: s!("2023-01-19"),
            matchup: s!(matchup),
            outcome: None,
            points: None,
            plus_minus: None,
        }
    }

    fn log() -> Vec<GameRecord> {
        vec![
            g("1", "GSW vs. BOS"),
            g("1", "BOS @ GSW"),
            g("2", "BOS vs. GSW"),
            g("2", "GSW @ BOS"),
            g("3", "GSW vs. LAL"),
            g("3", "LAL @ GSW"),
            g("4", "BOS vs. PHI"),
            g("5", "GSW vs. BOSX"),
        ]
    }

    #[test]
    fn finds_both_home_and_away_rows() {
        let found = filter_matchups(&log(), "GSW", "BOS");
        let ids: Vec<&str> = found.iter().map(|g| g.game_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "1", "2", "2"]);
    }

    #[test]
    fn symmetric_in_team_order() {
        assert_eq!(
            filter_matchups(&log(), "GSW", "BOS"),
            filter_matchups(&log(), "BOS", "GSW")
        );
    }

    #[test]
    fn case_insensitive() {
        let v = matchup_variants("GSW", "BOS");
        assert!(matches_any(&v, "gsw vs. bos"));
        assert!(matches_any(&matchup_variants("gsw", "bos"), "GSW @ BOS"));
        assert_eq!(filter_matchups(&log(), "gsw", "Bos").len(), 4);
    }

    #[test]
    fn exact_text_only() {
        let v = matchup_variants("GSW", "BOS");
        assert!(!matches_any(&v, "GSW vs. BOSX"));
        assert!(!matches_any(&v, "GSW vs BOS"));
        assert!(!matches_any(&v, "GSW - BOS (neutral)"));
    }

    #[test]
    fn no_common_games_is_empty() {
        assert!(filter_matchups(&log(), "LAL", "PHI").is_empty());
        assert!(filter_matchups(&[], "GSW", "BOS").is_empty());
        // Same team twice can never match.
        assert!(filter_matchups(&log(), "GSW", "GSW").is_empty());
    }

    #[test]
    fn distinct_games_keeps_first_row_per_id() {
        let found = filter_matchups(&log(), "GSW", "BOS");
        let distinct = distinct_games(&found);
        assert_eq!(distinct.len(), 2);
        assert_eq!(distinct[0].matchup, "GSW vs. BOS");
        assert_eq!(distinct[1].matchup, "BOS vs. GSW");
    }

    #[test]
    fn variants_cover_four_spellings() {
        let v = matchup_variants("GSW", "BOS");
        assert!(v.contains(&s!("gsw vs. bos")));
        assert!(v.contains(&s!("gsw @ bos")));
        assert!(v.contains(&s!("bos vs. gsw")));
        assert!(v.contains(&s!("bos @ gsw")));
    }
}
