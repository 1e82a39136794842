//! Filesystem checks

use std::path::Path;

use log::warn;

/// Check that `path` is a regular file, logging a warning naming `what` otherwise
pub fn expect_file(path: &str, what: &str) -> bool {
    let is_file = Path::new(path).is_file();
    if !is_file {
        warn!("{} not found at {}", what, path);
    }
    is_file
}
