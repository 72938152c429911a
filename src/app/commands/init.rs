//! Init command - writes a commented default `relay.toml`.

use crate::domain::{AppError, CONFIG_FILE};
use crate::ports::ArtifactStore;

/// Commented config file whose values equal `ServerConfig::default()`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../../assets/relay.toml");

/// Execute the init command.
///
/// Returns the display path of the created file.
pub fn execute<S: ArtifactStore>(store: &S) -> Result<String, AppError> {
    if store.file_exists(CONFIG_FILE) {
        return Err(AppError::ConfigExists(store.display_path(CONFIG_FILE)));
    }

    store.write_file(CONFIG_FILE, DEFAULT_CONFIG_TEMPLATE)?;
    Ok(store.display_path(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServerConfig;
    use crate::domain::config::parse::parse_config_content;
    use crate::testing::MemoryArtifactStore;

    #[test]
    fn template_parses_to_defaults() {
        let config = parse_config_content(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn writes_config_file() {
        let store = MemoryArtifactStore::new();

        let path = execute(&store).unwrap();

        assert_eq!(path, "memory://relay.toml");
        assert_eq!(store.read("relay.toml").as_deref(), Some(DEFAULT_CONFIG_TEMPLATE));
    }

    #[test]
    fn refuses_to_overwrite() {
        let store = MemoryArtifactStore::new().with_file("relay.toml", "port = 3000\n");

        let result = execute(&store);

        assert!(matches!(result, Err(AppError::ConfigExists(_))));
        assert_eq!(store.read("relay.toml").as_deref(), Some("port = 3000\n"));
    }
}
