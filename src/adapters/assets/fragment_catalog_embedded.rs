use include_dir::{Dir, DirEntry, include_dir};

use crate::ports::{FragmentCatalog, FragmentSource};

static SERVER_FRAGMENT_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/server");

/// Fragment catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedFragmentCatalog;

impl EmbeddedFragmentCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl FragmentCatalog for EmbeddedFragmentCatalog {
    fn fragments(&self) -> Vec<FragmentSource<'_>> {
        let mut sources = Vec::new();
        collect_sources(&SERVER_FRAGMENT_DIR, &mut sources);
        sources.sort_by(|a, b| a.name.cmp(b.name));
        sources
    }
}

fn collect_sources(dir: &'static Dir<'static>, sources: &mut Vec<FragmentSource<'static>>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                if let Some(name) = file.path().to_str()
                    && name.ends_with(".j2")
                    && let Some(content) = file.contents_utf8()
                {
                    sources.push(FragmentSource { name, content });
                }
            }
            DirEntry::Dir(subdir) => collect_sources(subdir, sources),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_contains_every_fragment() {
        let catalog = EmbeddedFragmentCatalog::new();
        let names: Vec<_> = catalog.fragments().iter().map(|s| s.name).collect();

        assert_eq!(
            names,
            vec![
                "bootstrap.js.j2",
                "chat/custom_proxy.js.j2",
                "chat/disabled.js.j2",
                "chat/gemini.js.j2",
                "image_generations.js.j2",
                "preamble.js.j2",
                "tts/custom_proxy.js.j2",
                "tts/disabled.js.j2",
                "tts/placeholder_error.js.j2",
            ]
        );
    }
}
