// src/gui/components/buttons.rs

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let find = ui.add_enabled(
            app.form.find_enabled(),
            egui::Button::new(egui::RichText::new("Find Matches").strong()),
        );
        if find.clicked() {
            actions::find(app, ui.ctx());
        }

        if ui.button("Reset").clicked() {
            actions::reset(app);
        }

        if ui.button("Quit (Esc)").clicked() {
            logf!("UI: Quit clicked");
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if app.form.is_searching() {
            ui.add(egui::Spinner::new().size(16.0));
        }
    });
}
