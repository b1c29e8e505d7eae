// src/core/mod.rs

pub mod net;
pub mod table;

pub use net::StatsClient;
pub use table::{StatsResponse, Table};
