use crate::error::{Result, TodoError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_FILE: &str = "todos.txt";
const DEFAULT_DELETE_PAUSE_MS: u64 = 1500;
const DEFAULT_EXIT_PAUSE_MS: u64 = 1000;

/// Configuration for todofile, optionally read from a JSON file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// Path of the todo file, relative to the working directory unless absolute.
    #[serde(default = "default_file")]
    pub file: PathBuf,

    /// How long the delete confirmation stays on screen.
    #[serde(default = "default_delete_pause_ms")]
    pub delete_pause_ms: u64,

    /// Pause after "Exiting..." before the process ends.
    #[serde(default = "default_exit_pause_ms")]
    pub exit_pause_ms: u64,
}

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILE)
}

fn default_delete_pause_ms() -> u64 {
    DEFAULT_DELETE_PAUSE_MS
}

fn default_exit_pause_ms() -> u64 {
    DEFAULT_EXIT_PAUSE_MS
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            delete_pause_ms: DEFAULT_DELETE_PAUSE_MS,
            exit_pause_ms: DEFAULT_EXIT_PAUSE_MS,
        }
    }
}

impl TodoConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(TodoError::Io)?;
        let config: TodoConfig =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        Ok(config)
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Result<Self> {
        let file = file.into();
        if file.as_os_str().is_empty() {
            return Err(TodoError::Config("todo file path cannot be empty".into()));
        }
        self.file = file;
        Ok(self)
    }

    /// Drop both cosmetic pauses.
    pub fn without_pauses(mut self) -> Self {
        self.delete_pause_ms = 0;
        self.exit_pause_ms = 0;
        self
    }

    pub fn delete_pause(&self) -> Duration {
        Duration::from_millis(self.delete_pause_ms)
    }

    pub fn exit_pause(&self) -> Duration {
        Duration::from_millis(self.exit_pause_ms)
    }
}
