// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{find, reset, ...}.

mod find;          // src/gui/actions/find.rs
mod play_by_play;  // src/gui/actions/play_by_play.rs

pub use find::{find, poll_search};
pub use play_by_play::{play_by_play, poll_play_by_play};

use crate::gui::app::App;

/// Back to a blank form. Work still in flight is abandoned; its result is
/// dropped with the receiver.
pub fn reset(app: &mut App) {
    logf!("Reset: from state={}", app.form.name());
    app.form.reset();
    app.search_rx = None;
    app.clear_play_by_play();
    app.bump_epoch();
    app.status("Choose a year to begin");
}
