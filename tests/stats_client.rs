// tests/stats_client.rs
//
// Client, roster, matchup and play-by-play paths against a local mock of
// the stats API.

use httpmock::prelude::*;
use serde_json::{Value, json};

use nba_match_finder::{
    AppError, Season,
    config::Settings,
    core::StatsClient,
    matchups,
    progress::RecordingProgress,
    specs::play_by_play,
    teams,
};

fn client_for(server: &MockServer) -> StatsClient {
    let settings = Settings {
        api_base: server.base_url(),
        http_timeout_seconds: 5,
        ..Settings::default()
    };
    StatsClient::new(&settings).unwrap()
}

fn franchise_doc() -> Value {
    json!({
        "resource": "franchisehistory",
        "parameters": { "LeagueID": "00" },
        "resultSets": [
            {
                "name": "FranchiseHistory",
                "headers": ["LEAGUE_ID", "TEAM_ID", "TEAM_CITY", "TEAM_NAME", "START_YEAR", "END_YEAR"],
                "rowSet": [
                    ["00", 1610612744, "Golden State", "Warriors", "1946", "2024"],
                    ["00", 1610612744, "San Francisco", "Warriors", "1962", "1970"],
                    ["00", 1610612738, "Boston", "Celtics", "1946", "2024"],
                    ["00", 1610612747, "Los Angeles", "Lakers", "1948", "2024"],
                    ["00", 1610612760, "Seattle", "SuperSonics", "1967", "1995"]
                ]
            },
            {
                "name": "DefunctTeams",
                "headers": ["LEAGUE_ID", "TEAM_ID", "TEAM_CITY", "TEAM_NAME", "START_YEAR", "END_YEAR"],
                "rowSet": [["00", 1610610024, "Baltimore", "Bullets", "1947", "1954"]]
            }
        ]
    })
}

fn game_row(game_id: &str, abbr: &str, date: &str, matchup: &str, wl: &str) -> Value {
    json!(["22022", 0, abbr, abbr, game_id, date, matchup, wl, 110, 4.0])
}

fn season_doc() -> Value {
    json!({
        "resource": "leaguegamefinderparameters",
        "resultSets": [{
            "name": "LeagueGameFinderResults",
            "headers": [
                "SEASON_ID", "TEAM_ID", "TEAM_ABBREVIATION", "TEAM_NAME", "GAME_ID",
                "GAME_DATE", "MATCHUP", "WL", "PTS", "PLUS_MINUS"
            ],
            "rowSet": [
                game_row("0022200650", "GSW", "2023-01-19", "GSW vs. BOS", "W"),
                game_row("0022200650", "BOS", "2023-01-19", "BOS @ GSW", "L"),
                game_row("0022200612", "LAL", "2023-01-15", "LAL vs. PHI", "W"),
                game_row("0022200440", "BOS", "2022-12-10", "BOS vs. GSW", "W"),
                game_row("0022200440", "GSW", "2022-12-10", "GSW @ BOS", "L")
            ]
        }]
    })
}

fn pbp_doc() -> Value {
    json!({
        "resource": "playbyplay",
        "resultSets": [{
            "name": "PlayByPlay",
            "headers": [
                "GAME_ID", "EVENTNUM", "EVENTMSGTYPE", "PERIOD", "PCTIMESTRING",
                "HOMEDESCRIPTION", "NEUTRALDESCRIPTION", "VISITORDESCRIPTION", "SCORE"
            ],
            "rowSet": [
                ["0022200650", 0, 12, 1, "12:00", null, "Start of 1st Period", null, null],
                ["0022200650", 2, 1, 1, "11:41", "Curry 26' 3PT Jump Shot", null, null, "0 - 3"],
                ["0022200650", 4, 5, 1, "11:20", null, null, "Tatum Bad Pass Turnover", null]
            ]
        }]
    })
}

#[test]
fn sends_browser_headers_and_decodes_envelope() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET)
            .path("/franchisehistory")
            .query_param("LeagueID", "00")
            .header_exists("user-agent")
            .header("x-nba-stats-origin", "stats")
            .header("x-nba-stats-token", "true");
        then.status(200).json_body(franchise_doc());
    });

    let client = client_for(&server);
    let doc = client.get("franchisehistory", &[("LeagueID", "00".to_string())]).unwrap();
    m.assert();

    assert_eq!(doc.tables().len(), 2);
    assert_eq!(doc.table("franchisehistory").unwrap().row_count(), 5);
}

#[test]
fn non_success_status_is_an_error() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET).path("/leaguegamefinder");
        then.status(500).body("boom");
    });

    let client = client_for(&server);
    let err = matchups::find_matchups(&client, Season::new(2022), "GSW", "BOS", None).unwrap_err();
    m.assert();
    match err {
        AppError::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.contains("/leaguegamefinder"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn roster_from_franchise_history() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/franchisehistory");
        then.status(200).json_body(franchise_doc());
    });

    let client = client_for(&server);
    let mut prog = RecordingProgress::default();
    let roster = teams::load(&client, 1996, Some(&mut prog)).unwrap();

    // OKC's Seattle row ends in 1995 and OKC has no other row here.
    assert_eq!(roster, vec!["BOS", "GSW", "LAL"]);
    assert_eq!(prog.total, 1);
    assert_eq!(prog.steps, vec!["franchise history"]);
    assert!(prog.finished);
}

#[test]
fn roster_falls_back_when_api_is_down() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/franchisehistory");
        then.status(503);
    });

    let client = client_for(&server);
    assert!(teams::load(&client, 1996, None).is_err());
    let roster = teams::load_or_fallback(&client, 1996, None);
    assert_eq!(roster, teams::static_abbreviations());
}

#[test]
fn finds_matchups_for_the_season() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET)
            .path("/leaguegamefinder")
            .query_param("PlayerOrTeam", "T")
            .query_param("Season", "2022-23");
        then.status(200).json_body(season_doc());
    });

    let client = client_for(&server);
    let games = matchups::find_matchups(&client, Season::new(2022), "bos", "gsw", None).unwrap();
    m.assert();

    let ids: Vec<&str> = games.iter().map(|g| g.game_id.as_str()).collect();
    assert_eq!(ids, vec!["0022200650", "0022200650", "0022200440", "0022200440"]);
    assert_eq!(matchups::distinct_games(&games).len(), 2);

    let none = matchups::find_matchups(&client, Season::new(2022), "GSW", "PHI", None).unwrap();
    assert!(none.is_empty());
}

#[test]
fn loads_play_by_play() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/playbyplayv2")
            .query_param("GameID", "0022200650")
            .query_param("StartPeriod", "0")
            .query_param("EndPeriod", "0");
        then.status(200).json_body(pbp_doc());
    });

    let client = client_for(&server);
    let events = play_by_play::fetch(&client, "0022200650").unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].description(), "Start of 1st Period");
    assert_eq!(events[1].score.as_deref(), Some("0 - 3"));
    assert_eq!(events[2].description(), "Tatum Bad Pass Turnover");
}

#[cfg(feature = "cli")]
#[test]
fn cli_runs_end_to_end_from_flags() {
    use std::io::Cursor;

    use chrono::NaiveDate;
    use nba_match_finder::cli::{self, Args};

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/franchisehistory");
        then.status(200).json_body(franchise_doc());
    });
    server.mock(|when, then| {
        when.method(GET).path("/leaguegamefinder");
        then.status(200).json_body(season_doc());
    });
    server.mock(|when, then| {
        when.method(GET).path("/playbyplayv2");
        then.status(200).json_body(pbp_doc());
    });

    let client = client_for(&server);
    let today = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let args = Args {
        season: Some("2022-23".to_string()),
        team1: Some("gsw".to_string()),
        team2: Some("BOS".to_string()),
        ..Args::default()
    };

    let mut out = Vec::new();
    cli::run_with(&args, &client, 1996, today, &mut Cursor::new("0022200440\n"), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Teams from 1996-97 to present (3 teams):\nBOS, GSW, LAL\n"));
    assert!(text.contains("GAME_ID"));
    assert_eq!(text.matches("0022200440").count(), 3); // two table rows and the play-by-play header
    assert!(text.contains("Play-by-play for game 0022200440 (3 events):"));

    // Unknown team flag fails before any search.
    let args = Args { team1: Some("SEA".to_string()), ..args };
    let err = cli::run_with(&args, &client, 1996, today, &mut Cursor::new(""), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, AppError::UnknownTeam(_)));
}
