//! Generate command - synthesizes the relay server and its setup artifacts.

use crate::app::services::Synthesizer;
use crate::domain::artifact::ENV_EXAMPLE_FILE_NAME;
use crate::domain::{AppError, GeneratedArtifact, LiteralWarning, ServerConfig, lint_literals};
use crate::ports::{ArtifactStore, FragmentCatalog};

/// Result of a generate run.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub artifact: GeneratedArtifact,
    /// Values embedded verbatim that would break or alter the generated program.
    pub warnings: Vec<LiteralWarning>,
}

/// Execute the generate command.
///
/// Literal warnings are reported alongside the artifact; the synthesized text is
/// the same whether or not there are any.
pub fn execute<C: FragmentCatalog>(
    config: &ServerConfig,
    catalog: &C,
) -> Result<GenerateOutcome, AppError> {
    let warnings = lint_literals(config);
    let artifact = Synthesizer::new(catalog)?.generate(config)?;
    Ok(GenerateOutcome { artifact, warnings })
}

/// Write the program (and `.env.example` when a secret is needed) into `store`.
///
/// Returns the display paths of the written files.
pub fn write_artifact<S: ArtifactStore>(
    artifact: &GeneratedArtifact,
    store: &S,
) -> Result<Vec<String>, AppError> {
    let mut written = Vec::new();

    store.write_file(artifact.file_name, &artifact.source_text)?;
    written.push(store.display_path(artifact.file_name));

    if let Some(content) = artifact.env_example() {
        store.write_file(ENV_EXAMPLE_FILE_NAME, &content)?;
        written.push(store.display_path(ENV_EXAMPLE_FILE_NAME));
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::EmbeddedFragmentCatalog;
    use crate::domain::{ChatProvider, TtsProvider};
    use crate::testing::MemoryArtifactStore;

    #[test]
    fn reports_warnings_without_changing_output() {
        let catalog = EmbeddedFragmentCatalog::new();
        let config = ServerConfig {
            tts: TtsProvider::CustomProxy { url: "http://host/it's".into() },
            ..Default::default()
        };

        let outcome = execute(&config, &catalog).unwrap();

        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.artifact.source_text.contains("const TTS_UPSTREAM_URL = 'http://host/it's';"));
    }

    #[test]
    fn writes_only_program_without_secret() {
        let catalog = EmbeddedFragmentCatalog::new();
        let outcome = execute(&ServerConfig::default(), &catalog).unwrap();
        let store = MemoryArtifactStore::new();

        let written = write_artifact(&outcome.artifact, &store).unwrap();

        assert_eq!(written, vec!["memory://proxy-server.js".to_string()]);
        assert_eq!(store.read("proxy-server.js"), Some(outcome.artifact.source_text.clone()));
    }

    #[test]
    fn writes_env_example_for_gemini() {
        let catalog = EmbeddedFragmentCatalog::new();
        let config = ServerConfig {
            chat: ChatProvider::Gemini { model: "gemini-2.5-flash".into() },
            ..Default::default()
        };
        let outcome = execute(&config, &catalog).unwrap();
        let store = MemoryArtifactStore::new();

        write_artifact(&outcome.artifact, &store).unwrap();

        assert_eq!(store.paths(), vec![".env.example".to_string(), "proxy-server.js".to_string()]);
        assert_eq!(store.read(".env.example").as_deref(), Some("GEMINI_API_KEY=your_api_key_here\n"));
    }
}
