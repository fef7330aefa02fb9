//! Error types for Sidekick
//!
//! All errors use thiserror for structured error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing info: {0} is required")]
    MissingInfo(&'static str),

    #[error("Note is empty: title and body are both blank")]
    EmptyNote,

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Validation errors are rejected before any state change; everything
    /// else surfaced from the storage layer.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::MissingInfo(_) | AppError::EmptyNote)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
