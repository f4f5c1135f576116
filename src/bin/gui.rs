// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use bin_lookup::{
    config::{consts::CONFIG_FILE, options::AppOptions, state::GuiState},
    gui, log,
};
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/icon.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    log::init();

    let mut app_options = AppOptions::load(Path::new(CONFIG_FILE)).unwrap_or_else(|e| {
        bin_lookup::loge!("Config: {} (using defaults)", e);
        AppOptions::default()
    });
    app_options.apply_env();

    let size = GuiState::default();
    let mut viewport = ViewportBuilder::default()
        .with_inner_size([size.window_w as f32, size.window_h as f32]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, app_options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
