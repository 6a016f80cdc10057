//! Screen Constants
//!
//! Centralized defaults shared by the config loader, controllers and table.

/// Simulated write latency for a submission
pub const DEFAULT_SUBMIT_LATENCY_MS: u64 = 1000;

/// Rows per table page; pagination only kicks in above this count
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum description length accepted by the form
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Description cell width (in characters) before the ellipsis
pub const DESCRIPTION_ELLIPSIS_LEN: usize = 40;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "crud-demo.toml";
