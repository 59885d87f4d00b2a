use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilenameGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl FilenameGuardError {
    /// Short category name, used as the heading when the binary prints an error.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Walk(_) => "Walk",
            Self::FileWrite { .. } => "FileWrite",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }
}

pub type Result<T> = std::result::Result<T, FilenameGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
