//! TodoStore implementation over a plain text file.
//!
//! The file is the store: it must exist before records can be appended, and
//! removing it is how the store is destroyed. Deleting a single record
//! rewrites the whole file through a temporary sibling, because the format
//! has no in-place variable-length deletion.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, TodorError};
use crate::store::records::Todo;

/// Suffix of the temporary sibling file used by the delete rewrite.
pub const TEMP_FILE_SUFFIX: &str = ".tmp";

/// Line-indexed record store backed by a single text file.
///
/// The store performs no locking: two processes mutating the same file can
/// race. Callers that need crash-safety around [`TodoStore::delete_at`]
/// must journal externally.
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    /// Create a store handle for the given file path.
    ///
    /// The file itself is not touched. It must be created externally (or
    /// via `delete_all(true)`) before records can be appended.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one encoded record to the end of the store.
    ///
    /// Fails with [`TodorError::StoreMissing`] if the backing file does not
    /// exist; append never creates the store.
    pub fn append(&self, todo: &Todo) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| self.map_not_found(e))?;
        writeln!(file, "{}", todo.encode())?;
        Ok(())
    }

    /// Read every record line, newline stripped, in file order.
    pub fn list_all(&self) -> Result<Vec<String>> {
        let reader = BufReader::new(self.open_for_read()?);
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }
        Ok(lines)
    }

    /// Read the record at a 1-based position.
    ///
    /// Returns `Ok(None)` when the position is past the last record: a
    /// missing store is an error, an out-of-range read is not.
    pub fn read_at(&self, position: usize) -> Result<Option<String>> {
        check_position(position)?;
        Ok(self.list_all()?.into_iter().nth(position - 1))
    }

    /// Total number of records in the store.
    pub fn count(&self) -> Result<usize> {
        Ok(self.list_all()?.len())
    }

    /// Remove the whole store file; with `recreate`, immediately create it
    /// empty so subsequent appends succeed.
    ///
    /// Removing an already-absent store is not an error, so
    /// `delete_all(true)` doubles as explicit store creation.
    pub fn delete_all(&self, recreate: bool) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        if recreate {
            File::create(&self.path)?;
        }
        Ok(())
    }

    /// Delete the record at a 1-based position by rewriting the store.
    ///
    /// Streams every line except the target into a `.tmp` sibling, closes
    /// both files, removes the original, then renames the sibling into
    /// place. A position past the last record copies everything and changes
    /// nothing. A crash between the remove and the rename leaves only the
    /// temp file behind; the store does not detect or repair that state.
    pub fn delete_at(&self, position: usize) -> Result<()> {
        check_position(position)?;
        let temp_path = self.temp_path();
        {
            let source = BufReader::new(self.open_for_read()?);
            let mut dest = File::create(&temp_path)?;
            for (index, line) in source.lines().enumerate() {
                let line = line?;
                if index + 1 != position {
                    writeln!(dest, "{line}")?;
                }
            }
        }
        fs::remove_file(&self.path)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Sibling path used by the delete rewrite.
    fn temp_path(&self) -> PathBuf {
        let mut path = self.path.clone().into_os_string();
        path.push(TEMP_FILE_SUFFIX);
        PathBuf::from(path)
    }

    /// Open the backing file for reading, mapping a missing file to
    /// [`TodorError::StoreMissing`].
    fn open_for_read(&self) -> Result<File> {
        File::open(&self.path).map_err(|e| self.map_not_found(e))
    }

    fn map_not_found(&self, e: std::io::Error) -> TodorError {
        if e.kind() == ErrorKind::NotFound {
            TodorError::StoreMissing(self.path.clone())
        } else {
            TodorError::Io(e)
        }
    }
}

/// Positions are 1-based; zero can never address a record.
fn check_position(position: usize) -> Result<()> {
    if position == 0 {
        return Err(TodorError::InvalidPosition(position));
    }
    Ok(())
}
