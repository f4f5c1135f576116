// src/gui/components/result_view.rs
use eframe::egui::{self, Color32, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(outcome) = &app.result else {
        ui.label(RichText::new("No lookup yet").weak());
        return;
    };

    match outcome {
        Ok(hit) => {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&hit.id).strong().size(18.0));
                ui.label(RichText::new("→").size(18.0));
                ui.label(RichText::new(&hit.value).size(18.0));
            });
        }
        Err(e) => {
            ui.label(RichText::new(e.to_string()).color(Color32::from_rgb(220, 30, 30)));
        }
    }
}
