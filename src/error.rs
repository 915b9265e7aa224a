use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for release-tools operations
#[derive(Error, Debug)]
pub enum ReleaseToolsError {
    #[error("Invalid version format '{0}' (expected x.y.z, e.g. 1.2.3)")]
    InvalidVersionFormat(String),

    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to parse {}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Build config error: {0}")]
    BuildConfig(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-tools
pub type Result<T> = std::result::Result<T, ReleaseToolsError>;

impl ReleaseToolsError {
    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseToolsError::Manifest(msg.into())
    }

    /// Create a build config error with context
    pub fn build_config(msg: impl Into<String>) -> Self {
        ReleaseToolsError::BuildConfig(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseToolsError::Config(msg.into())
    }
}
