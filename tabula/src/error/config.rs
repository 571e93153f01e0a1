//! Format configuration errors

use std::path::PathBuf;

/// Errors that can occur while loading a [`FormatConfig`](crate::format::FormatConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for the expected shape.
    #[error("Invalid format configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
