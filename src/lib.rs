// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod csv;
pub mod error;
pub mod gui;
pub mod loader;
pub mod resolver;
pub mod scan;
pub mod sheet;
pub mod source;
pub mod status;
pub mod store;
pub mod table;

pub use controller::Controller;
pub use crate::core::sanitize::normalize;
pub use error::{LoadError, LookupError};
pub use resolver::{Hit, resolve};
pub use table::{Record, Table};
