//! relaygen: synthesize an OpenAI-compatible relay server from a small configuration.
//!
//! Every output is a pure function of a [`ServerConfig`]: the program text, the
//! npm packages it needs, and the setup steps that install them.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::EmbeddedFragmentCatalog;

pub use app::commands::generate::GenerateOutcome;
pub use app::services::Synthesizer;
pub use domain::{
    AppError, ChatProvider, DependencySet, GeneratedArtifact, InstructionStep, LiteralWarning,
    Package, ServerConfig, TtsProvider, compose as compose_instructions, lint_literals,
    render_instructions,
};

/// Render the complete relay server program for `config`.
pub fn synthesize(config: &ServerConfig) -> Result<String, AppError> {
    let catalog = EmbeddedFragmentCatalog::new();
    Synthesizer::new(&catalog)?.synthesize(config)
}

/// Packages the program synthesized from `config` requires, in install order.
pub fn resolve_dependencies(config: &ServerConfig) -> DependencySet {
    DependencySet::resolve(config)
}

/// Derive program text, dependencies and setup steps in one pass.
pub fn generate(config: &ServerConfig) -> Result<GeneratedArtifact, AppError> {
    let catalog = EmbeddedFragmentCatalog::new();
    Synthesizer::new(&catalog)?.generate(config)
}

/// Parse and validate `relay.toml` content.
pub fn parse_config(content: &str) -> Result<ServerConfig, AppError> {
    domain::config::parse::parse_config_content(content)
}
