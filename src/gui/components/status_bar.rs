// src/gui/components/status_bar.rs
use eframe::egui::{self, widgets::Spinner};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if app.is_loading() {
            ui.add(Spinner::new());
        }
        ui.label(app.status_text());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let reload = ui
                .add_enabled(!app.is_loading(), egui::Button::new("⟳ Reload"))
                .on_hover_text(app.controller.options().source.location.as_str());
            if reload.clicked() {
                logf!("UI: reload clicked");
                crate::gui::actions::reload(app, ui.ctx());
            }
        });
    });
}
