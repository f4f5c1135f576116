// src/gui/components/search_bar.rs
use eframe::egui;

use crate::{gui::{actions, app::App}, scan::Scanner};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let scanning = app.scanner.is_running();
    let mut submitted = false;

    ui.horizontal(|ui| {
        ui.label("ID:");
        let edit = ui.add_enabled(
            !scanning,
            egui::TextEdit::singleline(&mut app.gui.query_text)
                .hint_text("Enter or scan an ID")
                .font(egui::TextStyle::Monospace)
                .desired_width(240.0),
        );

        if app.gui.focus_query && !scanning {
            edit.request_focus();
            app.gui.focus_query = false;
        }

        // Enter inside the box submits, same as the button
        if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submitted = true;
        }
        if ui.add_enabled(!scanning, egui::Button::new("Search")).clicked() {
            submitted = true;
        }
    });

    if submitted {
        actions::submit(app);
    }
}
