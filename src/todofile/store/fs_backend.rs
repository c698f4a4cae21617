use super::backend::StorageBackend;
use crate::error::{Result, TodoError};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

/// File backed storage: one todo file, rewritten in full on every save.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "todos".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, std::process::id()))
    }
}

impl StorageBackend for FsBackend {
    fn read_lines(&self, sink: &mut dyn FnMut(String)) -> Result<()> {
        let file = File::open(&self.path).map_err(TodoError::Io)?;
        // Undecodable bytes become U+FFFD so one bad line never ends the read.
        for raw in BufReader::new(file).split(b'\n') {
            let mut raw = raw.map_err(TodoError::Io)?;
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
            sink(String::from_utf8_lossy(&raw).into_owned());
        }
        Ok(())
    }

    fn write_lines(&self, lines: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TodoError::Io)?;
            }
        }

        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        let tmp_file = self.tmp_path();
        let written = File::create(&tmp_file)
            .and_then(|mut f| f.write_all(content.as_bytes()).and_then(|_| f.sync_all()))
            .and_then(|_| fs::rename(&tmp_file, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_file);
            return Err(TodoError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
