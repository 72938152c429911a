//! Shared testing utilities for relaygen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `relaygen` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("relaygen").expect("Failed to locate relaygen binary");
        cmd.current_dir(&self.work_dir).env_remove("RELAYGEN_LOG");
        cmd
    }

    /// Write `relay.toml` into the work directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("relay.toml"), content).expect("Failed to write relay.toml");
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Assert that a file exists relative to the work directory.
    pub fn assert_exists(&self, relative: &str) {
        let path = self.work_dir.join(relative);
        assert!(path.exists(), "{} should exist", path.display());
    }

    /// Assert that a file does not exist relative to the work directory.
    pub fn assert_not_exists(&self, relative: &str) {
        let path = self.work_dir.join(relative);
        assert!(!path.exists(), "{} should not exist", path.display());
    }
}
