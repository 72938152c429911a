pub mod artifact_filesystem;
pub mod assets;
pub mod template_engine;

pub use artifact_filesystem::FilesystemArtifactStore;
pub use assets::EmbeddedFragmentCatalog;
