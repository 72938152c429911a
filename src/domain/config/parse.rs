//! Pure parse/validate for relay configuration (`relay.toml`).

use crate::domain::{AppError, ServerConfig};

/// Parse and validate relay configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ServerConfig, AppError> {
    let config: ServerConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
