// src/gui/components/selectors.rs
//
// Year / Team 1 / Team 2 dropdowns. Enabled state comes from the form;
// picks are collected during layout and applied once the borrows end.

use eframe::egui;

use crate::{
    gui::{
        app::App,
        form::{FormError, FormState},
    },
    seasons::Season,
};

const COMBO_WIDTH: f32 = 200.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut picked_season: Option<Season> = None;
    let mut picked_team1: Option<String> = None;
    let mut picked_team2: Option<String> = None;

    egui::Grid::new("finder_selectors")
        .num_columns(2)
        .spacing([24.0, 8.0])
        .show(ui, |ui| {
            // Year
            ui.label("Selected Year:");
            ui.add_enabled_ui(app.form.year_enabled(), |ui| {
                let current = app.form.season();
                let text = current.map(|s| s.to_string()).unwrap_or_else(|| s!("Choose Year"));
                egui::ComboBox::from_id_salt("year_combo")
                    .selected_text(text)
                    .width(COMBO_WIDTH)
                    .show_ui(ui, |ui| {
                        for season in &app.seasons {
                            let on = current == Some(*season);
                            if ui.selectable_label(on, season.to_string()).clicked() && !on {
                                picked_season = Some(*season);
                            }
                        }
                    });
            });
            ui.end_row();

            // Team 1
            ui.label("Selected Team 1:");
            ui.add_enabled_ui(app.form.team1_enabled(), |ui| {
                if let Some(t) = team_combo(ui, "team1_combo", "Choose Team 1", app.form.team1(), &app.teams) {
                    picked_team1 = Some(t);
                }
            });
            ui.end_row();

            // Team 2
            ui.label("Selected Team 2:");
            ui.add_enabled_ui(app.form.team2_enabled(), |ui| {
                if let Some(t) = team_combo(ui, "team2_combo", "Choose Team 2", app.form.team2(), &app.teams) {
                    picked_team2 = Some(t);
                }
            });
            ui.end_row();
        });

    if let Some(season) = picked_season {
        apply(app, "Year", &season.to_string(), |f| f.select_season(season));
    }
    if let Some(team) = picked_team1 {
        apply(app, "Team 1", &team, |f| f.select_team1(&team));
    }
    if let Some(team) = picked_team2 {
        // A new opponent invalidates the shown game.
        app.clear_play_by_play();
        apply(app, "Team 2", &team, |f| f.select_team2(&team));
    }
}

fn team_combo(
    ui: &mut egui::Ui,
    id: &str,
    placeholder: &str,
    current: Option<&str>,
    teams: &[String],
) -> Option<String> {
    let mut picked = None;
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.unwrap_or(placeholder))
        .width(COMBO_WIDTH)
        .show_ui(ui, |ui| {
            for team in teams {
                let on = current == Some(team.as_str());
                if ui.selectable_label(on, team).clicked() && !on {
                    picked = Some(team.clone());
                }
            }
        });
    picked
}

fn apply<F>(app: &mut App, what: &str, value: &str, transition: F)
where
    F: FnOnce(&mut FormState) -> Result<(), FormError>,
{
    match transition(&mut app.form) {
        Ok(()) => {
            logf!("UI: {what} → {value} (state={})", app.form.name());
            app.status(format!("{what}: {value}"));
        }
        Err(e) => {
            loge!("UI: {what} → {value} rejected: {e}");
            app.status(format!("Cannot change {what} now"));
        }
    }
}
