//! Code synthesizer service.

use minijinja::Environment;

use crate::adapters::template_engine::{build_template_environment, render_fragment};
use crate::domain::artifact::SERVER_FILE_NAME;
use crate::domain::{AppError, DependencySet, GeneratedArtifact, ProgramPlan, ServerConfig, compose};
use crate::ports::FragmentCatalog;

/// Turns a configuration into program text using a fragment catalog.
///
/// Holds no per-call state; one instance can serve any number of configurations.
pub struct Synthesizer<'a> {
    env: Environment<'a>,
}

impl<'a> Synthesizer<'a> {
    /// Register every fragment from `catalog` with a fresh template environment.
    pub fn new<C: FragmentCatalog + ?Sized>(catalog: &'a C) -> Result<Self, AppError> {
        let env = build_template_environment(&catalog.fragments())?;
        Ok(Self { env })
    }

    /// Render the complete program for `config`.
    ///
    /// Output is byte-identical for equal configurations.
    pub fn synthesize(&self, config: &ServerConfig) -> Result<String, AppError> {
        let plan = ProgramPlan::from_config(config);
        tracing::debug!(fragments = ?plan.template_names(), "selected fragments");

        let mut source = String::new();
        for fragment in plan.fragments() {
            let rendered = render_fragment(&self.env, fragment.template_name(), &fragment.context())?;
            source.push_str(&rendered);
        }
        Ok(source)
    }

    /// Derive program text, dependencies and instructions together.
    pub fn generate(&self, config: &ServerConfig) -> Result<GeneratedArtifact, AppError> {
        let source_text = self.synthesize(config)?;
        let dependencies = DependencySet::resolve(config);
        let instructions = compose(config, &dependencies);

        Ok(GeneratedArtifact { file_name: SERVER_FILE_NAME, source_text, dependencies, instructions })
    }
}
