// src/gui/actions/submit.rs
use std::mem::take;

use crate::{error::LookupError, gui::app::App, resolver::Hit};

/// Look up whatever is in the text box.
pub fn submit(app: &mut App) {
    let raw = take(&mut app.gui.query_text);
    let outcome = app.controller.submit(&raw);

    // Nothing to look up or nothing loaded: leave the text for another try.
    if matches!(outcome, Err(LookupError::EmptyQuery | LookupError::DataNotReady)) {
        app.gui.query_text = raw;
    }
    show_outcome(app, outcome);
}

pub fn show_outcome(app: &mut App, outcome: Result<Hit, LookupError>) {
    app.result = Some(outcome);
    app.gui.focus_query = true;
}
