use crate::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Keep the directory alive until the test is done
    pub _temp_dir: TempDir,
    pub file: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let file = temp_dir.path().join("todos.txt");
        Self {
            _temp_dir: temp_dir,
            file,
        }
    }

    pub fn backend(&self) -> FsBackend {
        FsBackend::new(&self.file)
    }

    pub fn write(&self, content: &str) {
        std::fs::write(&self.file, content).expect("failed to seed todo file");
    }

    pub fn read(&self) -> String {
        std::fs::read_to_string(&self.file).expect("failed to read todo file")
    }
}
