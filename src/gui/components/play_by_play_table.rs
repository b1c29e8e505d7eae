// src/gui/components/play_by_play_table.rs
//
// Read-only play-by-play grid for the selected game.

use eframe::egui::{self, Align, Layout};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const HEADERS: [&str; 4] = ["Period", "Clock", "Score", "Play"];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(view) = &app.play_by_play else { return };

    ui.horizontal(|ui| {
        ui.strong(&view.label);
        ui.label(format!("({} plays, game {})", view.events.len(), view.game_id));
    });

    if view.events.is_empty() {
        ui.label("No plays recorded for this game.");
        return;
    }

    let row_h = ui.text_style_height(&egui::TextStyle::Body) + 4.0;

    TableBuilder::new(ui)
        .id_salt("pbp_table")
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(60.0))
        .column(Column::exact(70.0))
        .column(Column::exact(90.0))
        .column(Column::remainder().at_least(200.0))
        .header(row_h, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(row_h, view.events.len(), |mut row| {
                let ev = &view.events[row.index()];
                row.col(|ui| {
                    ui.label(ev.period.to_string());
                });
                row.col(|ui| {
                    ui.label(&ev.clock);
                });
                row.col(|ui| {
                    ui.label(ev.score.as_deref().unwrap_or(""));
                });
                row.col(|ui| {
                    ui.label(ev.description());
                });
            });
        });
}
