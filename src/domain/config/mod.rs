//! Relay server configuration model.
//!
//! A `ServerConfig` fully determines the synthesized program. It is an immutable
//! value: every edit produces a new config, and every derived artifact is
//! recomputed from scratch.

pub mod parse;
mod provider_dto;

use provider_dto::{ChatProviderDto, TtsProviderDto};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "relay.toml";

pub const DEFAULT_PORT: i64 = 8111;
pub const DEFAULT_WIDTH: i64 = 1024;
pub const DEFAULT_HEIGHT: i64 = 1024;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Complete set of options controlling synthesis.
///
/// Integer fields are deliberately wide: the synthesizer embeds whatever value it
/// is given, and range checks belong to [`ServerConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// TCP port the generated server binds to.
    pub port: i64,
    /// Fallback image width when a caller omits `size`.
    pub default_width: i64,
    /// Fallback image height when a caller omits `size`.
    pub default_height: i64,
    /// How `/v1/chat/completions` is fulfilled.
    pub chat: ChatProvider,
    /// How `/v1/audio/speech` is fulfilled.
    pub tts: TtsProvider,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
            chat: ChatProvider::default(),
            tts: TtsProvider::default(),
        }
    }
}

impl ServerConfig {
    /// Enforce the input constraints the configuration form applies.
    ///
    /// Synthesis never calls this; it is applied where configs enter the system.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(1..=65535).contains(&self.port) {
            return Err(AppError::invalid_config(format!(
                "port must be between 1 and 65535 (got {})",
                self.port
            )));
        }
        if self.default_width <= 0 {
            return Err(AppError::invalid_config(format!(
                "default_width must be greater than 0 (got {})",
                self.default_width
            )));
        }
        if self.default_height <= 0 {
            return Err(AppError::invalid_config(format!(
                "default_height must be greater than 0 (got {})",
                self.default_height
            )));
        }
        if let ChatProvider::Gemini { model } = &self.chat
            && model.trim().is_empty()
        {
            return Err(AppError::invalid_config("chat.model must not be empty"));
        }
        Ok(())
    }

    /// Whether any endpoint forwards requests to a user-supplied URL.
    pub fn uses_custom_proxy(&self) -> bool {
        self.chat.is_custom_proxy() || self.tts.is_custom_proxy()
    }

    /// Whether any endpoint answers with the shared "not implemented" error.
    pub fn has_disabled_endpoint(&self) -> bool {
        matches!(self.chat, ChatProvider::Disabled) || matches!(self.tts, TtsProvider::Disabled)
    }
}

/// Fulfillment mode for the chat-completions endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case", try_from = "ChatProviderDto")]
pub enum ChatProvider {
    /// Always answers `501 not_implemented`.
    #[default]
    Disabled,
    /// Calls the managed Gemini service with a locally stored key.
    Gemini { model: String },
    /// Forwards the request verbatim to `<base_url>/chat/completions`.
    CustomProxy { base_url: String },
}

impl ChatProvider {
    pub fn is_managed(&self) -> bool {
        matches!(self, ChatProvider::Gemini { .. })
    }

    pub fn is_custom_proxy(&self) -> bool {
        matches!(self, ChatProvider::CustomProxy { .. })
    }
}

/// Fulfillment mode for the text-to-speech endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case", try_from = "TtsProviderDto")]
pub enum TtsProvider {
    /// Always answers `501 not_implemented`.
    #[default]
    Disabled,
    /// Active endpoint that rejects every voice with `400 invalid_request_error`.
    PlaceholderError,
    /// Forwards the request verbatim to `url` and streams the audio back.
    CustomProxy { url: String },
}

impl TtsProvider {
    pub fn is_custom_proxy(&self) -> bool {
        matches!(self, TtsProvider::CustomProxy { .. })
    }
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}
