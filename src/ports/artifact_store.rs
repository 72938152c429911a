use crate::domain::AppError;

/// Port for persisting generated files.
///
/// Paths are relative to the store's root.
pub trait ArtifactStore {
    /// Check whether a file exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Write a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Human-readable location of `path`, for messages.
    fn display_path(&self, path: &str) -> String;
}
