// src/gui/components/mod.rs
//
// Widgets for the finder window. Each `draw` reads `App` and routes clicks
// through `gui::actions` or the form transitions.

pub mod buttons;
pub mod play_by_play_table;
pub mod results;
pub mod selectors;
