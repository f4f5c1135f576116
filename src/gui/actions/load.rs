// src/gui/actions/load.rs
use std::{sync::atomic::Ordering, thread};

use eframe::egui;

use crate::{gui::app::App, gui::progress::GuiStatus, loader};

/// Load the configured source on a worker thread. The store swap is atomic,
/// so lookups keep answering from the old table until the new one is in.
pub fn reload(app: &mut App, ctx: &egui::Context) {
    if app.loading.swap(true, Ordering::AcqRel) {
        logd!("Load: already running, ignoring reload");
        return;
    }

    let store = app.controller.store();
    let opts = app.controller.options().source.clone();
    let loading = app.loading.clone();
    let mut status = GuiStatus::new(app.status.clone(), ctx.clone());
    let ctx = ctx.clone();

    let spawned = thread::Builder::new()
        .name(s!("loader"))
        .spawn(move || {
            // Outcome already reported through `status` and the log.
            let _ = loader::load(&opts.source(), &opts, &store, &mut status);
            loading.store(false, Ordering::Release);
            ctx.request_repaint();
        });

    if let Err(e) = spawned {
        loge!("Load: could not spawn worker: {}", e);
        app.loading.store(false, Ordering::Release);
        app.status(crate::status::Notice::LoadFailed.to_string());
    }
}
