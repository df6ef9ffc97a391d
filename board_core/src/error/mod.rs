//! Error types for loading, saving, and editing a board.

use std::path::PathBuf;

use board_store::{KeyNotFound, Rejection};
use thiserror::Error;

/// Shared `Result` alias for the engine.
pub type Result<T> = std::result::Result<T, BoardError>;

/// Everything that can go wrong in the engine.
///
/// Load and save failures are fatal to the operation in progress. Add failures
/// (`DuplicateImage`, `InvalidEntry`, `InvalidResource`) are recoverable and
/// leave the board untouched.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    KeyNotFound(#[from] KeyNotFound),

    #[error("format error on line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("board file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("I/O failure at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot add image: {0}")]
    DuplicateImage(Rejection),

    #[error("cannot add entry: {0}")]
    InvalidEntry(Rejection),

    #[error("cannot add {image}: no image file at {}", path.display())]
    InvalidResource { image: String, path: PathBuf },

    #[error("invalid configuration: {details}")]
    Config { details: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<Rejection> for BoardError {
    fn from(rejection: Rejection) -> Self {
        if rejection.is_duplicate_image() {
            BoardError::DuplicateImage(rejection)
        } else {
            BoardError::InvalidEntry(rejection)
        }
    }
}

impl BoardError {
    /// Wrap an I/O error, separating a missing file from other failures.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            BoardError::SourceNotFound { path }
        } else {
            BoardError::Io { path, source }
        }
    }

    /// Process exit status an entry point should use for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            BoardError::SourceNotFound { .. } => 2,
            BoardError::Format { .. } => 3,
            BoardError::Io { .. } => 4,
            BoardError::Config { .. } => 5,
            _ => 1,
        }
    }

    /// True for add-time failures the user can retry with different input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BoardError::DuplicateImage(_)
                | BoardError::InvalidEntry(_)
                | BoardError::InvalidResource { .. }
        )
    }
}
