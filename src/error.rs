// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from the stats API: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Stats API returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Stats API response has no result set named {name}")]
    MissingResultSet { name: String },

    #[error("Result set is missing column {column}")]
    MissingColumn { column: String },

    #[error("Invalid season: {0} (expected e.g. 2022-23)")]
    InvalidSeason(String),

    #[error("Unknown team abbreviation: {0}")]
    UnknownTeam(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("GUI failed: {0}")]
    Gui(String),
}

impl AppError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    pub fn input_error(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn { column: column.into() }
    }
}
