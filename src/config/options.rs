// src/config/options.rs
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::{AppError, Result};
use crate::source::Source;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub scan: ScanOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    /// File path or http(s) URL of the spreadsheet.
    pub location: String,
    /// Append `?ts=<millis>` to URLs so proxies never serve a stale sheet.
    pub cache_bust: bool,
    pub timeout_secs: u64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            location: s!(DEFAULT_SOURCE),
            cache_bust: true,
            timeout_secs: FETCH_TIMEOUT_SECS,
        }
    }
}

impl SourceOptions {
    pub fn source(&self) -> Source {
        Source::parse(&self.location)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Stop the scanner after the first decoded code (then look it up).
    pub stop_after_read: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { stop_after_read: true }
    }
}

impl AppOptions {
    /// Read options from a TOML file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            logd!("Config: {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|e| AppError::Config {
            message: format!("failed to read '{}': {}", path.display(), e),
        })?;

        let opts: AppOptions = toml::from_str(&text).map_err(|e| AppError::Config {
            message: format!("failed to parse '{}': {}", path.display(), e),
        })?;

        logf!("Config: loaded {} (source={})", path.display(), opts.source.location);
        Ok(opts)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self).map_err(|e| AppError::Config {
            message: format!("failed to serialize options: {e}"),
        })?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, text)?;
        Ok(())
    }

    /// `BIN_LOOKUP_SOURCE` wins over the file, but not over explicit flags.
    pub fn apply_env(&mut self) {
        if let Ok(v) = std::env::var(SOURCE_ENV) {
            let v = v.trim();
            if !v.is_empty() {
                logd!("Config: source from {SOURCE_ENV}");
                self.source.location = s!(v);
            }
        }
    }
}
