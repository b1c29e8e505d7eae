// src/lib.rs

#[macro_use]
pub mod macros;

pub mod log;
pub mod error;
pub mod config;
pub mod core;
pub mod specs;

pub mod model;
pub mod progress;
pub mod seasons;
pub mod teams;
pub mod matchups;

pub mod gui;
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{AppError, Result};
pub use seasons::Season;
