pub mod fragment_catalog_embedded;

pub use fragment_catalog_embedded::EmbeddedFragmentCatalog;
