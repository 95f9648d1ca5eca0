//! Theme loading errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading theme overrides from configuration
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Override file could not be read
    #[error("Failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML override document is malformed
    #[error("Invalid theme TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON override document is malformed
    #[error("Invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
