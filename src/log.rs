// src/log.rs
//
// File logging for both front ends. The `logf!`/`logd!`/`loge!` macros in
// `macros.rs` forward here, so call sites never name `tracing` directly.

use std::fs;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::consts::{DEFAULT_LOG_DIRECTIVE, LOG_FILE_NAME};
use crate::config::settings::Settings;
use crate::error::{AppError, Result};

#[doc(hidden)]
pub use tracing;

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

/// Install the global subscriber: a daily rolling file under the configured
/// log directory, plus stderr when `echo_stderr` is set.
///
/// Keep the returned guard alive until exit, otherwise buffered lines are lost.
pub fn init(settings: &Settings, echo_stderr: bool) -> Result<WorkerGuard> {
    let dir = settings.log_dir();
    fs::create_dir_all(&dir).map_err(|e| {
        AppError::log_setup_error(format!("Failed to create log directory {}: {e}", dir.display()))
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_NAME)
        .build(&dir)
        .map_err(|e| AppError::log_setup_error(e.to_string()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let stderr_layer = echo_stderr.then(|| {
        fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_filter(filter())
    });

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(filter()),
        )
        .with(stderr_layer)
        .try_init()
        .map_err(|e| AppError::log_setup_error(e.to_string()))?;

    logf!("Logs are being written to {}", dir.join(LOG_FILE_NAME).display());
    Ok(guard)
}
