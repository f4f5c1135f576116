// src/source.rs
use std::{fmt, fs, path::PathBuf, str::FromStr, time::Duration};

use crate::config::options::SourceOptions;
use crate::core::net;
use crate::error::LoadError;
use crate::sheet::SheetFormat;

/// Where the dataset lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// `http://` / `https://` (any case) is a URL; anything else a file path.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Url(s!(s))
        } else {
            Source::File(PathBuf::from(s))
        }
    }

    pub fn location(&self) -> String {
        match self {
            Source::Url(u) => u.clone(),
            Source::File(p) => p.to_string_lossy().into_owned(),
        }
    }

    /// Format implied by the file extension (query and fragment ignored for URLs).
    pub fn format(&self) -> SheetFormat {
        let ext = match self {
            Source::File(p) => p
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default(),
            Source::Url(u) => {
                let path = u.split(['?', '#']).next().unwrap_or("");
                let last = path.rsplit('/').next().unwrap_or("");
                last.rsplit_once('.').map(|(_, e)| s!(e)).unwrap_or_default()
            }
        };
        SheetFormat::from_extension(&ext)
    }

    /// Retrieve the raw bytes.
    pub fn fetch(&self, opts: &SourceOptions) -> Result<Vec<u8>, LoadError> {
        match self {
            Source::Url(u) => {
                let url = if opts.cache_bust {
                    net::with_cache_buster(u, net::now_millis())
                } else {
                    u.clone()
                };
                net::http_get_bytes(&url, Duration::from_secs(opts.timeout_secs))
            }
            Source::File(p) => fs::read(p).map_err(|e| LoadError::fetch(self.location(), e)),
        }
    }
}

impl FromStr for Source {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Source::parse(s))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kinds() {
        assert_eq!(Source::parse("HTTPS://x/y.xlsx"), Source::Url(s!("HTTPS://x/y.xlsx")));
        assert_eq!(Source::parse(" ./PRV File.xlsx "), Source::File(PathBuf::from("./PRV File.xlsx")));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(Source::parse("data/list.CSV").format(), SheetFormat::Csv);
        assert_eq!(Source::parse("https://h/x.tsv?ts=1").format(), SheetFormat::Tsv);
        assert_eq!(Source::parse("https://h/dir.v2/sheet").format(), SheetFormat::Workbook);
        assert_eq!(Source::parse("PRV File.xlsx").format(), SheetFormat::Workbook);
    }
}
