use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// Filesystem-based artifact store rooted at an output directory.
#[derive(Debug, Clone)]
pub struct FilesystemArtifactStore {
    root: PathBuf,
}

impl FilesystemArtifactStore {
    /// Create an artifact store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create an artifact store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn file_exists(&self, path: &str) -> bool {
        self.root.join(path).exists()
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, content)?;
        Ok(())
    }

    fn display_path(&self, path: &str) -> String {
        self.root.join(path).display().to_string()
    }
}
