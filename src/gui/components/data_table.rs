// src/gui/components/data_table.rs
//
// Read-only preview of the loaded table. Purely a view over a snapshot.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const ROW_H: f32 = 18.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let table = app.controller.table();

    let header = format!("Loaded data ({} rows)", table.len());
    let resp = egui::CollapsingHeader::new(header)
        .id_salt("loaded_data")
        .open(Some(app.gui.show_table))
        .show(ui, |ui| {
            if table.is_empty() {
                ui.label(RichText::new("Nothing loaded").weak());
                return;
            }

            ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
            let max_h = ui.available_height();
            TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(max_h)
                .column(Column::initial(160.0).at_least(60.0).resizable(true).clip(true))
                .column(Column::remainder().clip(true))
                .header(ROW_H + 2.0, |mut h| {
                    h.col(|ui| { ui.strong("ID"); });
                    h.col(|ui| { ui.strong("Value"); });
                })
                .body(|body| {
                    body.rows(ROW_H, table.len(), |mut row| {
                        let rec = &table.records()[row.index()];
                        row.col(|ui| { ui.monospace(&rec.id); });
                        row.col(|ui| { ui.label(&rec.value); });
                    });
                });
        });

    if resp.header_response.clicked() {
        app.gui.show_table = !app.gui.show_table;
    }
}
