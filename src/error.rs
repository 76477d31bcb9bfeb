//! Error types for the lumencost library.

use thiserror::Error;

/// Errors produced by the library layer.
///
/// The metrics engine itself raises nothing; these cover the project
/// file and the validation the CLI performs before invoking it.
#[derive(Debug, Error)]
pub enum LumencostError {
    /// Project file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Project file is not valid JSON or does not match the schema
    #[error("invalid project file: {0}")]
    Json(#[from] serde_json::Error),

    /// Site requirements failed validation
    #[error("invalid site requirements: {0}")]
    InvalidSite(String),

    /// Referenced lamp does not exist in the project
    #[error("no lamp named '{0}' in project")]
    LampNotFound(String),

    /// A lamp with the same name already exists in the project
    #[error("lamp named '{0}' already exists in project")]
    DuplicateLamp(String),
}

/// Convenience result type for library operations.
pub type Result<T> = std::result::Result<T, LumencostError>;
