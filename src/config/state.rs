// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};

/// UI-only state; options live in the controller.
#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Contents of the ID text box
    pub query_text: String,

    /// Ask the text box to grab focus on the next frame
    pub focus_query: bool,

    /// Loaded-data preview expanded
    pub show_table: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            query_text: s!(),
            focus_query: true,
            show_table: false,
        }
    }
}
