//! Error types for hailo-config

use std::path::PathBuf;

/// Result type for hailo-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors.
///
/// These are the only failures the resolver raises. Unknown apps,
/// architectures, models or inputs are reported as empty collections or
/// `None`, never as errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing config file: {}", path.display())]
    MissingConfig { path: PathBuf },

    #[error("Invalid YAML in {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },
}

impl Error {
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self::MissingConfig { path: path.into() }
    }

    pub fn invalid(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        Self::InvalidConfig {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Path of the document that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::MissingConfig { path } | Self::InvalidConfig { path, .. } => path,
        }
    }
}
