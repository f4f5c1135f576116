// src/core/net.rs
//
// HTTP(S) GET for the dataset. ureq handles TLS, redirects and status codes;
// any non-2xx answer comes back as an error.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::consts::{CACHE_BUST_PARAM, MAX_BODY_BYTES, USER_AGENT};
use crate::error::LoadError;

/// Fetch `url` and return the raw body.
pub fn http_get_bytes(url: &str, timeout: Duration) -> Result<Vec<u8>, LoadError> {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .into();

    let mut resp = agent
        .get(url)
        .header("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| LoadError::fetch(url, e))?;

    logd!("Net: GET {} → {}", url, resp.status());

    resp.body_mut()
        .with_config()
        .limit(MAX_BODY_BYTES)
        .read_to_vec()
        .map_err(|e| LoadError::fetch(url, e))
}

/// Append `ts=<stamp>` to the query string, keeping any `#fragment` last.
pub fn with_cache_buster(url: &str, stamp: u128) -> String {
    let (base, fragment) = match url.find('#') {
        Some(i) => url.split_at(i),
        None => (url, ""),
    };
    let sep = if base.contains('?') { "&" } else { "?" };
    format!("{base}{sep}{CACHE_BUST_PARAM}={stamp}{fragment}")
}

pub fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
