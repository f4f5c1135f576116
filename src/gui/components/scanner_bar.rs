// src/gui/components/scanner_bar.rs
use eframe::egui;

use crate::{gui::{actions, app::App}, scan::Scanner};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let scanning = app.scanner.is_running();

    ui.horizontal(|ui| {
        if scanning {
            if ui.button("■ Stop scan").clicked() {
                actions::stop_scan(app);
            }
        } else if ui.button("▶ Scan").clicked() {
            actions::start_scan(app);
        }

        if !scanning {
            ui.label(egui::RichText::new("Keyboard-wedge scanner: press Scan, then read a code").weak());
        }
    });

    if scanning {
        ui.label(
            egui::RichText::new(format!("Reading: {}", app.scan_buffer))
                .monospace()
                .weak(),
        );
    }
}
