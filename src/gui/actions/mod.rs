// src/gui/actions/mod.rs
mod load;
mod scan;
mod submit;

pub use load::reload;
pub use scan::{pump_scanner, start_scan, stop_scan};
pub use submit::{show_outcome, submit};
