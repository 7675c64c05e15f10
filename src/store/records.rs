//! Todo record type and its line encoding.
//!
//! One record is one line in the backing file:
//! `title="<title>",due_date=<YYYY-MM-DD or empty>`.

use std::fmt;

use chrono::NaiveDate;

/// Date format used for the encoded due date.
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// Free-form title. Callers must keep it newline-free; the encoding does
    /// not escape it, so a title containing `",due_date=` corrupts the line.
    pub title: String,

    /// Optional due date, encoded as an ISO calendar date.
    pub due_date: Option<NaiveDate>,
}

impl Todo {
    /// Create a new record.
    pub fn new(title: impl Into<String>, due_date: Option<NaiveDate>) -> Self {
        Self {
            title: title.into(),
            due_date,
        }
    }

    /// Encode this record as its storage line, without the terminator.
    pub fn encode(&self) -> String {
        let due = match self.due_date {
            Some(date) => date.format(DUE_DATE_FORMAT).to_string(),
            None => String::new(),
        };
        format!("title=\"{}\",due_date={}", self.title, due)
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
