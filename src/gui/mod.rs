// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod form;
pub mod progress;

pub use app::{App, run};
