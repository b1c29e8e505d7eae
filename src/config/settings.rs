// src/config/settings.rs
use std::{fs, path::{Path, PathBuf}};

use serde::Deserialize;

use super::consts::*;
use crate::error::{AppError, Result};

/// User settings, read from `<config_dir>/nba_match_finder/config.toml`.
/// The file is optional and never written; env vars win over it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Stats API root, without the endpoint name.
    pub api_base: String,
    pub league_id: String,
    pub http_timeout_seconds: u64,
    /// First season start year offered to users and kept in the roster.
    pub since_year: i32,
    pub log_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: s!(DEFAULT_API_BASE),
            league_id: s!(DEFAULT_LEAGUE_ID),
            http_timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
            since_year: ACTIVE_SINCE_YEAR,
            log_dir: None,
        }
    }
}

impl Settings {
    /// Load from the default config path, then apply env overrides.
    pub fn load() -> Result<Self> {
        let mut settings = Self::load_from(&config_path())?;
        settings.apply_env(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Missing file → defaults. Unreadable or malformed file → error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply overrides from a key lookup (the process env in production).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup(ENV_API_BASE) {
            self.api_base = base;
        }
        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT) {
            self.http_timeout_seconds = raw.trim().parse().map_err(|_| {
                AppError::config_error(format!("{ENV_HTTP_TIMEOUT} must be a number of seconds, got {raw:?}"))
            })?;
        }
        if let Some(dir) = lookup(ENV_LOG_DIR) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(AppError::config_error(format!(
                "api_base must start with http:// or https://, got {:?}",
                self.api_base
            )));
        }
        if self.http_timeout_seconds == 0 {
            return Err(AppError::config_error("http_timeout_seconds must be greater than 0"));
        }
        if self.since_year < FIRST_LEAGUE_SEASON_YEAR {
            return Err(AppError::config_error(format!(
                "since_year must be {FIRST_LEAGUE_SEASON_YEAR} or later"
            )));
        }
        Ok(())
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| app_dir().join(LOG_SUBDIR))
    }
}

fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

pub fn config_path() -> PathBuf {
    app_dir().join(CONFIG_FILE)
}
