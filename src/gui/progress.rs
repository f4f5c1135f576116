// src/gui/progress.rs
use std::sync::{Arc, Mutex, PoisonError};

use eframe::egui;

use crate::error::LoadError;
use crate::status::{Notice, StatusSink};

/// Writes load notices into the shared status line and wakes the UI.
pub struct GuiStatus {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
}

impl GuiStatus {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx }
    }

    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
        self.ctx.request_repaint();
    }
}

impl StatusSink for GuiStatus {
    fn begin(&mut self) {
        self.set_status(Notice::Loading.to_string());
    }
    fn ready(&mut self, _rows: usize) {
        self.set_status(Notice::Ready.to_string());
    }
    fn failed(&mut self, _err: &LoadError) {
        self.set_status(format!("⚠ {}", Notice::LoadFailed));
    }
}
