// src/core/mod.rs

pub mod cell;
pub mod net;
pub mod sanitize;

pub use cell::{Cell, cell_to_string};
pub use sanitize::normalize;
