// src/error.rs
use thiserror::Error;

/// Why a dataset load failed. Both kinds surface to users as one generic
/// "could not load" message; the distinction is for the log.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("fetch error: {message} (source: {location})")]
    Fetch { message: String, location: String },

    #[error("parse error: {message} (source: {location})")]
    Parse { message: String, location: String },
}

impl LoadError {
    pub fn fetch(location: impl Into<String>, message: impl ToString) -> Self {
        LoadError::Fetch { message: message.to_string(), location: location.into() }
    }

    pub fn parse(location: impl Into<String>, message: impl ToString) -> Self {
        LoadError::Parse { message: message.to_string(), location: location.into() }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Fetch { .. } => "fetch",
            LoadError::Parse { .. } => "parse",
        }
    }
}

/// Failed lookups. The display text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Please enter or scan an ID.")]
    EmptyQuery,

    #[error("Data not loaded yet. Please wait or refresh.")]
    DataNotReady,

    /// `id` is the normalized query as entered (case preserved).
    #[error("ID not found in data.")]
    NotFound { id: String },
}

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("scanner is not running")]
    NotRunning,

    #[error("torch not supported by this scanner")]
    TorchUnsupported,

    #[error("scanner io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error for the frontends.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
