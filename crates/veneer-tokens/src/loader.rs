//! Theme file loading.
//!
//! Themes can be supplied by an external theme registry as TOML or JSON
//! files. The format is the serde shape of [`Theme`]:
//!
//! ```toml
//! key = "sunset"
//!
//! [colors]
//! textDarkest = "#1A1A1A"
//!
//! [typography]
//! fontWeightBold = 700
//! ```
//!
//! Loading only deserializes; callers that feed the theme into component
//! theme generators should validate it first against a reference theme
//! (typically a built-in) via [`Theme::validate_against`]. Generator
//! behavior is undefined for structurally invalid themes.

use std::path::Path;

use crate::{Error, Result, Theme};

impl Theme {
    /// Load a theme from a TOML or JSON file, dispatching on the extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Theme> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let theme = match extension.as_deref() {
            Some("toml") => Theme::from_toml(&content).map_err(|m| Error::parse(path, m))?,
            Some("json") => Theme::from_json(&content).map_err(|m| Error::parse(path, m))?,
            _ => return Err(Error::UnsupportedFormat { path: path.into() }),
        };

        tracing::debug!("Loaded theme '{}' from {}", theme.key(), path.display());
        Ok(theme)
    }

    /// Parse a theme from TOML text.
    pub fn from_toml(text: &str) -> std::result::Result<Theme, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }

    /// Parse a theme from JSON text.
    pub fn from_json(text: &str) -> std::result::Result<Theme, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }
}
