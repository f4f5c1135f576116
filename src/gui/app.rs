// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, PoisonError, atomic::{AtomicBool, Ordering}},
};

use eframe::egui;

use crate::{
    config::{options::AppOptions, state::GuiState},
    controller::Controller,
    error::LookupError,
    resolver::Hit,
    scan::{ChannelScanner, ScanFeed},
};

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Bin Lookup",
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, app_options)))),
    )?;
    Ok(())
}

pub struct App {
    pub controller: Controller,
    pub gui: GuiState,

    // status line (load worker writes here)
    pub status: Arc<Mutex<String>>,
    pub loading: Arc<AtomicBool>,

    // last lookup, shown under the search bar
    pub result: Option<Result<Hit, LookupError>>,

    // keyboard-wedge capture while scanning
    pub scanner: ChannelScanner,
    pub feed: ScanFeed,
    pub scan_buffer: String,
    pub status_before_scan: Option<String>,
}

impl App {
    pub fn new(ctx: &egui::Context, options: AppOptions) -> Self {
        let (scanner, feed) = ChannelScanner::channel();

        let mut app = Self {
            controller: Controller::new(options),
            gui: GuiState::default(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            loading: Arc::new(AtomicBool::new(false)),
            result: None,
            scanner,
            feed,
            scan_buffer: s!(),
            status_before_scan: None,
        };

        logf!("Init: source={}", app.controller.options().source.location);
        super::actions::reload(&mut app, ctx);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::actions::pump_scanner(self, ctx);

        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            crate::gui::components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::search_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::scanner_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::result_view::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
