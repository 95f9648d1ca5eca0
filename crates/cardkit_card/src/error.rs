//! Card configuration errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a card configuration
#[derive(Error, Debug)]
pub enum CardConfigError {
    #[error("Failed to read card config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid card config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for card configuration loading
pub type Result<T> = std::result::Result<T, CardConfigError>;
