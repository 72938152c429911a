mod artifact_store;
mod fragment_catalog;

pub use artifact_store::ArtifactStore;
pub use fragment_catalog::{FragmentCatalog, FragmentSource};
