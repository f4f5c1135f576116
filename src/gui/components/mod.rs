// src/gui/components/mod.rs
pub mod data_table;
pub mod result_view;
pub mod scanner_bar;
pub mod search_bar;
pub mod status_bar;
