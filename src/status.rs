// src/status.rs
use std::fmt;

use crate::error::LoadError;

/// What the status line shows around a load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Loading,
    Ready,
    LoadFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Notice::Loading => "Loading data...",
            Notice::Ready => "Ready. Scan or enter an ID.",
            Notice::LoadFailed => "Could not load data file.",
        })
    }
}

/// Load status reporting. Frontends (GUI/CLI) implement this to surface
/// status to users.
pub trait StatusSink {
    /// A load has started.
    fn begin(&mut self) {}

    /// The table was replaced with `rows` records.
    fn ready(&mut self, _rows: usize) {}

    /// The load failed; the previous table is still in place.
    fn failed(&mut self, _err: &LoadError) {}
}

/// Keeps every notice, in order. Handy for tests and scripted runs.
#[derive(Debug, Default)]
pub struct RecordingStatus {
    pub notices: Vec<Notice>,
}

impl StatusSink for RecordingStatus {
    fn begin(&mut self) { self.notices.push(Notice::Loading); }
    fn ready(&mut self, _rows: usize) { self.notices.push(Notice::Ready); }
    fn failed(&mut self, _err: &LoadError) { self.notices.push(Notice::LoadFailed); }
}
