//! Configuration file discovery and loading
//!
//! Values are resolved in priority order:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Config file (searched in standard locations)
//! 4. Built-in defaults (lowest priority)
//!
//! Only the file part lives here; CLI and environment handling is done by
//! each binary with clap.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use log::debug;
use serde::de::DeserializeOwned;

use crate::APP_NAME;

/// Describes where a configuration was loaded from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Explicit path provided via CLI or env var
    Explicit(PathBuf),
    /// Found in current working directory
    CurrentDir(PathBuf),
    /// Found in XDG config home (~/.config/iem-reports/)
    XdgConfig(PathBuf),
    /// Found in system config (/etc/iem-reports/)
    System(PathBuf),
    /// No config file found, using defaults
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ConfigSource::Explicit(p)
            | ConfigSource::CurrentDir(p)
            | ConfigSource::XdgConfig(p)
            | ConfigSource::System(p) => Some(p),
            ConfigSource::Defaults => None,
        }
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.path() {
            Some(p) => write!(f, "{}", p.display()),
            None => write!(f, "(defaults)"),
        }
    }
}

/// Find a configuration file in standard locations
///
/// Search order:
/// 1. The file named by `env_var` (e.g. `IEM_REPORTS_CONFIG`), when it exists
/// 2. `./<filename>`
/// 3. `$XDG_CONFIG_HOME/iem-reports/<filename>` (or `~/.config/iem-reports/`)
/// 4. `/etc/iem-reports/<filename>`
pub fn find_config_file(env_var: &str, filename: &str) -> ConfigSource {
    let explicit = env::var(env_var).ok().map(PathBuf::from);
    let candidates = [
        explicit.map(ConfigSource::Explicit),
        Some(ConfigSource::CurrentDir(PathBuf::from(filename))),
        Some(ConfigSource::XdgConfig(xdg_config_path(filename))),
        Some(ConfigSource::System(
            PathBuf::from("/etc").join(APP_NAME).join(filename),
        )),
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|source| source.path().is_some_and(|p| p.exists()))
        .unwrap_or(ConfigSource::Defaults)
}

fn xdg_config_path(filename: &str) -> PathBuf {
    let base = match (env::var("XDG_CONFIG_HOME"), env::var("HOME")) {
        (Ok(xdg), _) => PathBuf::from(xdg),
        (Err(_), Ok(home)) => PathBuf::from(home).join(".config"),
        // Relative fallback, will not normally exist
        _ => PathBuf::from(".config"),
    };
    base.join(APP_NAME).join(filename)
}

/// Load and parse a TOML configuration file, falling back to `T::default()`
/// when no file was found.
pub fn load_config<T: DeserializeOwned + Default>(source: &ConfigSource) -> anyhow::Result<T> {
    let Some(path) = source.path() else {
        return Ok(T::default());
    };
    debug!("reading config file {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config file {}", path.display()))
}
