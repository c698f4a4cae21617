use crate::error::Result;

/// Abstract interface for raw line storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `ItemStore` handles the "what" (parsing, ids, diagnostics).
pub trait StorageBackend {
    /// Stream every stored line into `sink`, in order.
    ///
    /// Lines handed to `sink` before a fault stay delivered; the fault is
    /// returned afterwards so the caller can keep a partial result.
    /// A missing file is reported as an `io::ErrorKind::NotFound` error.
    fn read_lines(&self, sink: &mut dyn FnMut(String)) -> Result<()>;

    /// Replace the full contents with `lines`, one per line.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_lines(&self, lines: &[String]) -> Result<()>;

    /// Human readable location, used in messages.
    fn location(&self) -> String;
}
