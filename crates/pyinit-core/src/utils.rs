//! Shared utility functions for pyinit crates

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so that
/// callers (and tests) can redirect it.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    dirs::home_dir().ok_or(Error::HomeDirNotFound)
}
