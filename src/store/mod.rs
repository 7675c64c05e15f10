//! Storage layer for todor.
//!
//! The store is a single plain text file holding zero or more
//! newline-terminated records in append order. Records are addressed by
//! 1-based position; positions are not stable identifiers, since deleting a
//! record shifts every later one down by one.
//!
//! # Example
//!
//! ```ignore
//! use todor::store::{Todo, TodoStore};
//!
//! let store = TodoStore::new("todos.txt");
//! store.delete_all(true)?;     // create an empty store
//! store.append(&Todo::new("write the report", None))?;
//! assert_eq!(store.count()?, 1);
//! ```

mod records;
mod todo_store;

pub use records::Todo;
pub use todo_store::{TEMP_FILE_SUFFIX, TodoStore};
