use super::backend::StorageBackend;
use crate::error::{Result, TodoError};
use std::cell::RefCell;
use std::io;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since todofile is single-threaded,
/// which lets `StorageBackend` keep `&self` on every method.
/// `None` content stands for a file that does not exist yet.
#[derive(Default)]
pub struct MemBackend {
    lines: RefCell<Option<Vec<String>>>,
    simulate_write_error: RefCell<Option<io::ErrorKind>>,
    simulate_read_fault: RefCell<Option<(usize, io::ErrorKind)>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose "file" already holds `lines`.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let backend = Self::new();
        *backend.lines.borrow_mut() = Some(lines.into_iter().map(Into::into).collect());
        backend
    }

    /// Current stored lines, `None` if nothing was ever written.
    pub fn lines(&self) -> Option<Vec<String>> {
        self.lines.borrow().clone()
    }

    /// Make every write fail with the given error kind (`None` to stop).
    pub fn set_simulate_write_error(&self, kind: Option<io::ErrorKind>) {
        *self.simulate_write_error.borrow_mut() = kind;
    }

    /// Fail reading after `after` lines have been delivered.
    pub fn set_simulate_read_fault(&self, after: usize, kind: io::ErrorKind) {
        *self.simulate_read_fault.borrow_mut() = Some((after, kind));
    }
}

impl StorageBackend for MemBackend {
    fn read_lines(&self, sink: &mut dyn FnMut(String)) -> Result<()> {
        let lines = self.lines.borrow();
        let Some(lines) = lines.as_ref() else {
            return Err(TodoError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "memory file does not exist",
            )));
        };

        let fault = *self.simulate_read_fault.borrow();
        for (n, line) in lines.iter().enumerate() {
            if let Some((after, kind)) = fault {
                if n == after {
                    return Err(TodoError::Io(io::Error::new(kind, "simulated read fault")));
                }
            }
            sink(line.clone());
        }
        Ok(())
    }

    fn write_lines(&self, lines: &[String]) -> Result<()> {
        if let Some(kind) = *self.simulate_write_error.borrow() {
            return Err(TodoError::Io(io::Error::new(kind, "simulated write error")));
        }
        *self.lines.borrow_mut() = Some(lines.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory://todos".to_string()
    }
}
