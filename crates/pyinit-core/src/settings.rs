//! Persisted user preferences (`~/.pyinitrc`)
//!
//! The file is a flat `key=value` list with `#` comments. Only
//! [`SettingsStore`] touches the raw text; the rest of the tool works with
//! [`Settings`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::utils::get_home_dir;

/// Settings file name, placed in the home directory
pub const SETTINGS_FILE_NAME: &str = ".pyinitrc";

/// User preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Show the ASCII banner before the interactive flow
    pub show_banner: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { show_banner: true }
    }
}

impl Settings {
    /// Parse settings text, starting from defaults.
    ///
    /// Blank lines, comments, lines without `=`, unknown keys and
    /// unparsable values are ignored.
    pub fn parse(content: &str) -> Self {
        let mut settings = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            let key = key.trim();
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');

            match key {
                "show_banner" => {
                    if let Some(flag) = parse_bool(value) {
                        settings.show_banner = flag;
                    }
                }
                other => debug!("ignoring unknown settings key: {}", other),
            }
        }

        settings
    }

    /// Render settings in the on-disk format
    pub fn to_file_contents(&self) -> String {
        let mut out = String::new();
        out.push_str("# pyinit configuration file\n");
        out.push_str("# This file configures the behavior of the pyinit CLI tool\n");
        out.push('\n');
        out.push_str("# Show ASCII banner on startup (true/false)\n");
        out.push_str(&format!("show_banner={}\n", self.show_banner));
        out
    }
}

/// Lenient boolean parsing (`true`, `TRUE`, `t`, `1`, `false`, `f`, `0`, ...)
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Some(true),
        "false" | "f" | "0" => Some(false),
        _ => None,
    }
}

/// Reads and writes [`Settings`] at a fixed path
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store backed by an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `~/.pyinitrc`
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(get_home_dir()?.join(SETTINGS_FILE_NAME)))
    }

    /// Path of the settings file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the settings file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load settings; a missing file yields defaults
    pub fn load(&self) -> Result<Settings> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Settings::parse(&content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(Error::settings(self.path.display().to_string(), e)),
        }
    }

    /// Write settings, replacing the file
    pub fn save(&self, settings: &Settings) -> Result<()> {
        std::fs::write(&self.path, settings.to_file_contents())
            .map_err(|e| Error::settings(self.path.display().to_string(), e))?;
        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Load settings, writing defaults back when the file is missing.
    ///
    /// The write-back is best effort: a failure is logged and the defaults
    /// are still returned.
    pub fn load_or_init(&self) -> Result<Settings> {
        if self.exists() {
            return self.load();
        }

        let settings = Settings::default();
        if let Err(e) = self.save(&settings) {
            warn!("Could not write default settings: {}", e);
        }
        Ok(settings)
    }
}
