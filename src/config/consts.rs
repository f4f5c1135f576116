// src/config/consts.rs

// Data source
pub const DEFAULT_SOURCE: &str = "./PRV File.xlsx";
pub const SOURCE_ENV: &str = "BIN_LOOKUP_SOURCE";
pub const HEADER_MARKER: &str = "ID";

// Net
pub const FETCH_TIMEOUT_SECS: u64 = 15;
pub const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;
pub const USER_AGENT: &str = concat!("bin_lookup/", env!("CARGO_PKG_VERSION"));
pub const CACHE_BUST_PARAM: &str = "ts";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "bin_lookup.toml";

// Window
pub const WINDOW_W: u32 = 720;
pub const WINDOW_H: u32 = 560;
