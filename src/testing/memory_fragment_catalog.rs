use crate::ports::{FragmentCatalog, FragmentSource};

/// In-memory fragment catalog for testing.
#[derive(Debug, Default)]
pub struct MemoryFragmentCatalog {
    fragments: Vec<(String, String)>,
}

impl MemoryFragmentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, content: &str) -> Self {
        self.fragments.push((name.to_string(), content.to_string()));
        self
    }
}

impl FragmentCatalog for MemoryFragmentCatalog {
    fn fragments(&self) -> Vec<FragmentSource<'_>> {
        let mut sources: Vec<_> = self
            .fragments
            .iter()
            .map(|(name, content)| FragmentSource { name, content })
            .collect();
        sources.sort_by(|a, b| a.name.cmp(b.name));
        sources
    }
}
