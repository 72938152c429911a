mod memory_artifact_store;
mod memory_fragment_catalog;

pub use memory_artifact_store::MemoryArtifactStore;
pub use memory_fragment_catalog::MemoryFragmentCatalog;
