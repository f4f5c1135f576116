// src/gui/actions/scan.rs
use std::mem::take;

use eframe::egui;

use crate::{gui::app::App, scan::Scanner};

const SCANNING: &str = "Scanning... (scan a code, or press Stop)";

pub fn start_scan(app: &mut App) {
    app.scan_buffer.clear();
    match app.scanner.start() {
        Ok(()) => {
            logf!("UI: scanner on");
            if app.status_before_scan.is_none() {
                app.status_before_scan = Some(app.status_text());
            }
            app.status(SCANNING);
        }
        Err(e) => {
            loge!("UI: scanner failed to start: {}", e);
            app.status("Could not start scanner.");
        }
    }
}

pub fn stop_scan(app: &mut App) {
    app.scanner.stop();
    app.scan_buffer.clear();
    logf!("UI: scanner off");

    // A load that finished while scanning has already written its own outcome.
    if let Some(prev) = app.status_before_scan.take() {
        if app.status_text() == SCANNING {
            app.status(prev);
        }
    }
}

/// While scanning, keystrokes belong to the scanner: text accumulates and
/// Enter emits one decoded code. Decoded codes are then looked up.
pub fn pump_scanner(app: &mut App, ctx: &egui::Context) {
    if !app.scanner.is_running() {
        return;
    }

    let mut finished = Vec::new();
    ctx.input(|i| {
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) => app.scan_buffer.push_str(t),
                egui::Event::Key { key: egui::Key::Enter, pressed: true, .. } => {
                    finished.push(take(&mut app.scan_buffer));
                }
                _ => {}
            }
        }
    });
    for code in finished {
        app.feed.send(code);
    }

    if let Some(code) = app.scanner.try_next_code() {
        let stop_after_read = app.controller.options().scan.stop_after_read;
        if stop_after_read {
            stop_scan(app);
        }
        let outcome = app.controller.submit(&code);
        super::show_outcome(app, outcome);
    }
}
