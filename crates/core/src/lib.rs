//! IEM Reports Core Library
//!
//! Shared pieces of the report services:
//! - Configuration loading (XDG-compliant)
//! - File system checks
//! - Common constants

mod config;
pub mod fs;

pub use config::{find_config_file, load_config, ConfigSource};
pub use fs::expect_file;

/// Application name used for XDG paths
pub const APP_NAME: &str = "iem-reports";

/// Default report server port
pub const DEFAULT_REPORTS_PORT: u16 = 9810;
