// src/specs/mod.rs
//! # Endpoint "specs" module
//!
//! This module hosts the **endpoint-specific reading rules** for the stats API.
//! Each spec focuses on a single endpoint and encodes *which query parameters it
//! needs* and *which columns of which result set carry the ground truth*.
//!
//! ## What lives here
//! - **Query parameters** for one endpoint (`params()`), using the league id from
//!   the client.
//! - **Pure parsing** of the decoded `StatsResponse` into domain records
//!   (`parse_doc()`), with columns looked up by header name, never by position.
//! - **Tolerant extraction**: numeric fields may arrive as JSON numbers or strings;
//!   rows with unusable key fields are skipped with a debug line rather than failing
//!   the whole response.
//!
//! ## What does **not** live here
//! - **Business rules** (roster filtering, matchup pairing) – see `teams` and
//!   `matchups`.
//! - **GUI/CLI concerns** – front ends call the facades, not the specs.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → teams::load / matchups::find_matchups → specs::<endpoint>::fetch()
//!                                                     ↘ StatsClient::get + parse_doc
//! ```
//!
//! ## Testing notes
//! - `parse_doc` is testable **offline** against JSON fixtures shaped like the API.
//!
//! In short: **`specs` knows how to read the endpoints.** Other layers decide what
//! to do with the records.
pub mod franchise_history;
pub mod game_finder;
pub mod play_by_play;
