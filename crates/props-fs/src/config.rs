//! Settings file loading
//!
//! The tool runs fine without any settings file. When one is given it is
//! TOML, and every field falls back to its default:
//!
//! ```toml
//! [output]
//! escape_unicode = true
//! unicode_threshold = 126
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

/// Default code point above which output characters are `\u`-escaped.
pub const DEFAULT_UNICODE_THRESHOLD: u32 = 0x7E;

/// Tool settings as read from the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub output: OutputSettings,
}

/// How properties output is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Escape characters above `unicode_threshold` as `\uXXXX`.
    pub escape_unicode: bool,
    pub unicode_threshold: u32,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            escape_unicode: true,
            unicode_threshold: DEFAULT_UNICODE_THRESHOLD,
        }
    }
}

/// Loads TOML settings files.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load and deserialize a TOML file.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = io::read_text(path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            format: "TOML".into(),
            message: e.to_string(),
        })
    }

    /// Load settings from `path`, or return the defaults when no path is given.
    pub fn load_settings(&self, path: Option<&Path>) -> Result<Settings> {
        match path {
            Some(path) => {
                let settings = self.load(path)?;
                tracing::debug!(path = %path.display(), ?settings, "loaded settings");
                Ok(settings)
            }
            None => Ok(Settings::default()),
        }
    }
}
