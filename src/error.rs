//! Error types for quicktask.
//!
//! The parsers never fail; these errors belong to the task list, the
//! configuration layer and the command-line front end.

use thiserror::Error;

/// Errors raised outside the parsing core.
#[derive(Debug, Error)]
pub enum QuickTaskError {
    /// Configuration could not be located, read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// A task id did not match anything in the list.
    #[error("not found: {0}")]
    NotFound(String),

    /// Input the command cannot work with.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl QuickTaskError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) | Self::NotFound(_) => 2,
            Self::Config(_) => 3,
            Self::Io(_) | Self::Json(_) | Self::Yaml(_) => 1,
        }
    }
}
