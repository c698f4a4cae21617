//! # Storage Layer
//!
//! The store owns the authoritative, ordered list of todos and the single file
//! that mirrors it. Everything that can go wrong while reading or writing that
//! file is reported as a [`Diagnostic`] instead of aborting: the list stays
//! usable after any failure.
//!
//! ## Split
//!
//! - [`backend::StorageBackend`]: raw line I/O ("how").
//!   - [`fs_backend::FsBackend`]: production, one text file, atomic rewrite.
//!   - [`mem_backend::MemBackend`]: in-memory, with fault injection for tests.
//! - [`item_store::ItemStore`]: ids, ordering, parsing, persistence ("what").
//!
//! ## Persistence Model
//!
//! - **Load once**: the file is read a single time at startup. Lines that do
//!   not parse are skipped with a diagnostic.
//! - **Rewrite on mutation**: every add and delete rewrites the whole file in
//!   current order.
//! - **No rollback**: when a save fails, the in-memory list keeps the change.
//!   Memory and disk may then disagree until the next successful save.
//!
//! ## Storage Layout
//!
//! ```text
//! todos.txt
//! {id:1, title:"Buy milk"}
//! {id:3, title:"Call mom"}
//! ```

use crate::error::TodoError;
use std::fmt;
use std::io;

pub mod backend;
pub mod fs_backend;
pub mod item_store;
pub mod mem_backend;

/// Closed set of non-fatal conditions the store can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A line does not have the record shape.
    UnmatchedLine,
    /// A record's id is not a readable integer.
    MalformedId,
    /// A record's id is too large.
    IdOverflow,
    /// A record repeats an id that was already loaded.
    DuplicateId,
    /// The todo file does not exist yet.
    FileNotFound,
    PermissionDenied,
    Io,
    Unexpected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub detail: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    /// Classify a read failure on `location`.
    pub fn from_read_error(err: &TodoError, location: &str) -> Self {
        match io_kind(err) {
            Some(io::ErrorKind::NotFound) => Self::new(
                DiagnosticKind::FileNotFound,
                format!("No todo file at {location} yet, starting empty"),
            ),
            Some(io::ErrorKind::PermissionDenied) => Self::new(
                DiagnosticKind::PermissionDenied,
                format!("You do not have permission to read {location}: {err}"),
            ),
            Some(_) => Self::new(
                DiagnosticKind::Io,
                format!("An I/O error occurred while reading {location}: {err}"),
            ),
            None => Self::new(
                DiagnosticKind::Unexpected,
                format!("Unexpected error while reading {location}: {err}"),
            ),
        }
    }

    /// Classify a write failure on `location`.
    pub fn from_write_error(err: &TodoError, location: &str) -> Self {
        match io_kind(err) {
            Some(io::ErrorKind::PermissionDenied) => Self::new(
                DiagnosticKind::PermissionDenied,
                format!("You do not have permission to write {location}: {err}"),
            ),
            Some(_) => Self::new(
                DiagnosticKind::Io,
                format!("An I/O error occurred while writing {location}: {err}"),
            ),
            None => Self::new(
                DiagnosticKind::Unexpected,
                format!("Unexpected error while writing {location}: {err}"),
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detail)
    }
}

fn io_kind(err: &TodoError) -> Option<io::ErrorKind> {
    match err {
        TodoError::Io(e) => Some(e.kind()),
        _ => None,
    }
}
