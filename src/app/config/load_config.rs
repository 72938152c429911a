//! Relay configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::domain::config::parse::parse_config_content;
use crate::domain::{AppError, CONFIG_FILE, ServerConfig};

/// Load the relay configuration.
///
/// An explicit path must exist. Without one, `relay.toml` in `dir` is used when
/// present; otherwise defaults apply.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ServerConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = dir.join(CONFIG_FILE);
            if !candidate.exists() {
                tracing::debug!(dir = %dir.display(), "no relay.toml found; using defaults");
                return Ok(ServerConfig::default());
            }
            candidate
        }
    };

    tracing::debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}
