use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for assembly-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Cannot read {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed version string on line {line_number}: {reason} (line: {line})")]
    MalformedVersionString {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in assembly-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a malformed version error for a 1-based line number.
    ///
    /// Trailing line terminators are stripped from the recorded line text.
    pub fn malformed(line_number: usize, line: &str, reason: impl Into<String>) -> Self {
        BumpError::MalformedVersionString {
            line_number,
            line: line.trim_end_matches(['\r', '\n']).to_string(),
            reason: reason.into(),
        }
    }

    /// Classify a read failure, separating a missing file from everything else.
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            BumpError::FileNotFound { path }
        } else {
            BumpError::FileUnreadable { path, source }
        }
    }
}
