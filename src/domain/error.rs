use std::io;

use thiserror::Error;

/// Library-wide error type for geomon operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Project name is empty or not a safe path component.
    #[error("Invalid project name '{0}': must be a non-empty path component without '/' or '..'")]
    InvalidProjectName(String),

    /// Year argument is out of range or not numeric.
    #[error("Invalid year '{0}': expected a four-digit year between 1980 and 2100")]
    InvalidYear(String),

    /// Session code argument is malformed.
    #[error("Invalid session '{0}': expected four alphanumeric characters (e.g. 0010)")]
    InvalidSession(String),

    /// The external engine's control programs could not be started.
    #[error("Processing engine unavailable: {0}")]
    EngineUnavailable(String),

    /// The engine reported a failed session through its status flag.
    #[error("Processing failed: PCF '{pcf}' aborted for session {session}")]
    EngineFailure { pcf: String, session: String },

    /// Profile block template could not be rendered.
    #[error("Failed to render profile block: {0}")]
    Render(String),
}

impl AppError {
    pub(crate) fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
