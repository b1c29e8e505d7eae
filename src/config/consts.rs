// src/config/consts.rs

// Net config
pub const DEFAULT_API_BASE: &str = "https://stats.nba.com/stats";
pub const DEFAULT_LEAGUE_ID: &str = "00";
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:128.0) Gecko/20100101 Firefox/128.0";
pub const REFERER: &str = "https://www.nba.com/";
pub const ORIGIN: &str = "https://www.nba.com";

// Seasons
pub const FIRST_LEAGUE_SEASON_YEAR: i32 = 1946; // 1946-47, first BAA season
pub const ACTIVE_SINCE_YEAR: i32 = 1996; // 1996-97
pub const SEASON_ROLLOVER_MONTH: u32 = 8; // August

// Config + logs
pub const APP_DIR: &str = "nba_match_finder";
pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_SUBDIR: &str = "logs";
pub const LOG_FILE_NAME: &str = "nba_match_finder.log";
pub const DEFAULT_LOG_DIRECTIVE: &str = "nba_match_finder=info";

pub const ENV_API_BASE: &str = "NBA_MATCH_FINDER_API_BASE";
pub const ENV_HTTP_TIMEOUT: &str = "NBA_MATCH_FINDER_HTTP_TIMEOUT";
pub const ENV_LOG_DIR: &str = "NBA_MATCH_FINDER_LOG_DIR";

// GUI
pub const WINDOW_TITLE: &str = "NBA Match Finder";
