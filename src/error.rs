//! Error types for todor
//!
//! Centralized error handling using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// All error types that can occur in the store
#[derive(Debug, Error)]
pub enum TodorError {
    /// The backing todo file does not exist
    #[error("Todo file not found: {}", .0.display())]
    StoreMissing(PathBuf),

    /// A position that can never address a record (positions are 1-based)
    #[error("Invalid position: {0} (positions start at 1)")]
    InvalidPosition(usize),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, TodorError>;
