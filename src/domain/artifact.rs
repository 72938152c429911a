use serde::Serialize;

use crate::domain::{DependencySet, InstructionStep, Package};

/// File name the generated program is saved under.
pub const SERVER_FILE_NAME: &str = "proxy-server.js";
/// Secret file read by the generated program when Gemini chat is selected.
pub const ENV_FILE_NAME: &str = ".env";
/// Example secret file written next to the program.
pub const ENV_EXAMPLE_FILE_NAME: &str = ".env.example";
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Everything derived from one configuration.
///
/// Never mutated in place; a changed configuration produces a new artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub file_name: &'static str,
    pub source_text: String,
    pub dependencies: DependencySet,
    pub instructions: Vec<InstructionStep>,
}

impl GeneratedArtifact {
    /// Content for `.env.example`, present only when the program reads a secret.
    pub fn env_example(&self) -> Option<String> {
        self.dependencies
            .contains(Package::Dotenv)
            .then(|| format!("{}=your_api_key_here\n", GEMINI_API_KEY_VAR))
    }
}
