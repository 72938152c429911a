use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// In-memory artifact store for testing.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    files: RefCell<BTreeMap<String, String>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.borrow_mut().insert(path.to_string(), content.to_string());
        self
    }

    pub fn read(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn paths(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn file_exists(&self, path: &str) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.files.borrow_mut().insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn display_path(&self, path: &str) -> String {
        format!("memory://{}", path)
    }
}
