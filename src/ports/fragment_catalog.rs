/// A fragment template as registered with the template engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentSource<'a> {
    /// Template name, relative to the catalog root (e.g. `chat/gemini.js.j2`).
    pub name: &'a str,
    /// Template text.
    pub content: &'a str,
}

/// Port for accessing the server fragment templates.
pub trait FragmentCatalog {
    /// All fragment templates, sorted by name.
    fn fragments(&self) -> Vec<FragmentSource<'_>>;
}
