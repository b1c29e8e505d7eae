// src/gui/components/results.rs
//
// Search outcome area: the game dropdown, an error line, or nothing at all
// before the first search.

use eframe::egui;

use crate::gui::{actions, app::App, form::SearchOutcome};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let red = egui::Color32::from_rgb(220, 30, 30);

    let mut picked: Option<usize> = None;
    let mut load_clicked = false;

    match app.form.outcome() {
        None => {}
        Some(SearchOutcome::NoGames) => {
            ui.label(egui::RichText::new("No games found.").color(red).strong());
        }
        Some(SearchOutcome::Failed(msg)) => {
            ui.label(egui::RichText::new(format!("Search failed: {msg}")).color(red));
        }
        Some(SearchOutcome::Games { games, selected }) => {
            let text = selected
                .and_then(|i| games.get(i))
                .map(|g| g.label())
                .unwrap_or_else(|| s!("Choose Game"));

            ui.horizontal(|ui| {
                ui.label("Games:");
                egui::ComboBox::from_id_salt("game_combo")
                    .selected_text(text)
                    .width(320.0)
                    .show_ui(ui, |ui| {
                        for (i, g) in games.iter().enumerate() {
                            let on = *selected == Some(i);
                            let label = format!("{}  {}", g.label(), g.outcome_letter());
                            if ui.selectable_label(on, label).clicked() && !on {
                                picked = Some(i);
                            }
                        }
                    });

                let can_load = selected.is_some() && app.pbp_rx.is_none();
                if ui.add_enabled(can_load, egui::Button::new("Play-by-play")).clicked() {
                    load_clicked = true;
                }
            });
        }
    }

    if let Some(i) = picked {
        match app.form.select_game(i) {
            Ok(()) => {
                let label = app.form.selected_game().map(|g| g.label()).unwrap_or_default();
                logf!("UI: Game → #{i} {label}");
                app.clear_play_by_play();
                app.status(format!("Selected {label}"));
            }
            Err(e) => loge!("UI: Game #{i} rejected: {e}"),
        }
    }

    if load_clicked {
        actions::play_by_play(app, ui.ctx());
    }
}
