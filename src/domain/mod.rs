pub mod artifact;
pub mod config;
pub mod dependency_set;
pub mod error;
pub mod instructions;
pub mod synthesis;

pub use artifact::GeneratedArtifact;
pub use config::{
    CONFIG_FILE, ChatProvider, DEFAULT_GEMINI_MODEL, DEFAULT_HEIGHT, DEFAULT_PORT, DEFAULT_WIDTH,
    ServerConfig, TtsProvider,
};
pub use dependency_set::{DependencySet, Package};
pub use error::AppError;
pub use instructions::{InstructionStep, compose, render_instructions};
pub use synthesis::{LiteralWarning, ProgramPlan, lint_literals};
