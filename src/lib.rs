//! Todor - a flat-file todo manager
//!
//! The core treats a plain text file as an ordered sequence of opaque
//! record lines addressed by 1-based position. The CLI and the interactive
//! prompt mode live in the binary and only format what the store returns.

pub mod error;
pub mod store;

pub use error::{Result, TodorError};
pub use store::{Todo, TodoStore};
