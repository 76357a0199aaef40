//! Error types for the token system.

use std::path::PathBuf;

/// Result type alias for theme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or validating themes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Theme file I/O error.
    #[error("Failed to read theme file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Theme file deserialization error.
    #[error("Failed to parse theme file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    /// The file extension does not map to a supported format.
    #[error("Unsupported theme file format '{path}' (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// A token group required by the reference theme is missing tokens.
    #[error("Theme '{theme}' is missing token '{token}' in group '{group}'")]
    MissingToken {
        theme: String,
        group: String,
        token: String,
    },

    /// A token that must be scalar carries a nested mapping.
    #[error("Theme '{theme}' token '{group}.{token}' must be a scalar value")]
    TokenShape {
        theme: String,
        group: String,
        token: String,
    },

    /// No theme registered under the requested key.
    #[error("Unknown theme '{key}'")]
    UnknownTheme { key: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a missing-token error.
    pub fn missing_token(
        theme: impl Into<String>,
        group: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::MissingToken {
            theme: theme.into(),
            group: group.into(),
            token: token.into(),
        }
    }

    /// Create a token-shape error.
    pub fn token_shape(
        theme: impl Into<String>,
        group: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::TokenShape {
            theme: theme.into(),
            group: group.into(),
            token: token.into(),
        }
    }

    /// Create an unknown-theme error.
    pub fn unknown_theme(key: impl Into<String>) -> Self {
        Self::UnknownTheme { key: key.into() }
    }
}
