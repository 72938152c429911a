//! Config flags shared by every synthesis subcommand.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::app::config::load_config;
use crate::domain::{AppError, ChatProvider, DEFAULT_GEMINI_MODEL, ServerConfig, TtsProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChatChoice {
    Disabled,
    Gemini,
    CustomProxy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TtsChoice {
    Disabled,
    PlaceholderError,
    CustomProxy,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Config file (defaults to ./relay.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Port the generated server listens on
    #[arg(short, long, allow_negative_numbers = true)]
    pub port: Option<i64>,
    /// Default image width
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i64>,
    /// Default image height
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i64>,
    /// Chat completions provider
    #[arg(long, value_enum)]
    pub chat: Option<ChatChoice>,
    /// Gemini model name (with --chat gemini)
    #[arg(long)]
    pub chat_model: Option<String>,
    /// Base URL of an OpenAI-compatible chat API (with --chat custom-proxy)
    #[arg(long)]
    pub chat_url: Option<String>,
    /// Text-to-speech provider
    #[arg(long, value_enum)]
    pub tts: Option<TtsChoice>,
    /// Full URL of the TTS endpoint (with --tts custom-proxy)
    #[arg(long)]
    pub tts_url: Option<String>,
}

impl ConfigArgs {
    /// Load the config file, apply flag overrides and validate the result.
    pub fn resolve(&self) -> Result<ServerConfig, AppError> {
        let cwd = std::env::current_dir()?;
        let base = load_config(self.config.as_deref(), &cwd)?;
        let config = self.apply(base)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay flag values onto `config`.
    pub fn apply(&self, mut config: ServerConfig) -> Result<ServerConfig, AppError> {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(width) = self.width {
            config.default_width = width;
        }
        if let Some(height) = self.height {
            config.default_height = height;
        }
        config.chat = self.apply_chat(config.chat)?;
        config.tts = self.apply_tts(config.tts)?;
        Ok(config)
    }

    fn apply_chat(&self, current: ChatProvider) -> Result<ChatProvider, AppError> {
        let choice = match self.chat {
            Some(choice) => choice,
            None => match &current {
                ChatProvider::Disabled => ChatChoice::Disabled,
                ChatProvider::Gemini { .. } => ChatChoice::Gemini,
                ChatProvider::CustomProxy { .. } => ChatChoice::CustomProxy,
            },
        };

        if self.chat_model.is_some() && choice != ChatChoice::Gemini {
            return Err(AppError::invalid_config("--chat-model requires --chat gemini"));
        }
        if self.chat_url.is_some() && choice != ChatChoice::CustomProxy {
            return Err(AppError::invalid_config("--chat-url requires --chat custom-proxy"));
        }

        Ok(match choice {
            ChatChoice::Disabled => ChatProvider::Disabled,
            ChatChoice::Gemini => {
                let model = match (&self.chat_model, current) {
                    (Some(model), _) => model.clone(),
                    (None, ChatProvider::Gemini { model }) => model,
                    (None, _) => DEFAULT_GEMINI_MODEL.to_string(),
                };
                ChatProvider::Gemini { model }
            }
            ChatChoice::CustomProxy => {
                let base_url = match (&self.chat_url, current) {
                    (Some(url), _) => url.clone(),
                    (None, ChatProvider::CustomProxy { base_url }) => base_url,
                    (None, _) => {
                        return Err(AppError::invalid_config(
                            "--chat custom-proxy requires --chat-url",
                        ));
                    }
                };
                ChatProvider::CustomProxy { base_url }
            }
        })
    }

    fn apply_tts(&self, current: TtsProvider) -> Result<TtsProvider, AppError> {
        let choice = match self.tts {
            Some(choice) => choice,
            None => match &current {
                TtsProvider::Disabled => TtsChoice::Disabled,
                TtsProvider::PlaceholderError => TtsChoice::PlaceholderError,
                TtsProvider::CustomProxy { .. } => TtsChoice::CustomProxy,
            },
        };

        if self.tts_url.is_some() && choice != TtsChoice::CustomProxy {
            return Err(AppError::invalid_config("--tts-url requires --tts custom-proxy"));
        }

        Ok(match choice {
            TtsChoice::Disabled => TtsProvider::Disabled,
            TtsChoice::PlaceholderError => TtsProvider::PlaceholderError,
            TtsChoice::CustomProxy => {
                let url = match (&self.tts_url, current) {
                    (Some(url), _) => url.clone(),
                    (None, TtsProvider::CustomProxy { url }) => url,
                    (None, _) => {
                        return Err(AppError::invalid_config("--tts custom-proxy requires --tts-url"));
                    }
                };
                TtsProvider::CustomProxy { url }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_keep_config() {
        let base = ServerConfig {
            port: 3000,
            chat: ChatProvider::CustomProxy { base_url: "http://llm/v1".into() },
            tts: TtsProvider::PlaceholderError,
            ..Default::default()
        };
        let config = ConfigArgs::default().apply(base.clone()).unwrap();
        assert_eq!(config, base);
    }

    #[test]
    fn numeric_flags_override() {
        let args = ConfigArgs { port: Some(3000), width: Some(800), height: Some(600), ..Default::default() };
        let config = args.apply(ServerConfig::default()).unwrap();
        assert_eq!((config.port, config.default_width, config.default_height), (3000, 800, 600));
    }

    #[test]
    fn gemini_choice_uses_default_model() {
        let args = ConfigArgs { chat: Some(ChatChoice::Gemini), ..Default::default() };
        let config = args.apply(ServerConfig::default()).unwrap();
        assert_eq!(config.chat, ChatProvider::Gemini { model: DEFAULT_GEMINI_MODEL.into() });
    }

    #[test]
    fn model_flag_updates_gemini_from_file() {
        let base = ServerConfig {
            chat: ChatProvider::Gemini { model: "gemini-2.5-flash".into() },
            ..Default::default()
        };
        let args = ConfigArgs { chat_model: Some("gemini-2.5-pro".into()), ..Default::default() };
        let config = args.apply(base).unwrap();
        assert_eq!(config.chat, ChatProvider::Gemini { model: "gemini-2.5-pro".into() });
    }

    #[test]
    fn custom_proxy_without_url_is_rejected() {
        let args = ConfigArgs { chat: Some(ChatChoice::CustomProxy), ..Default::default() };
        assert!(args.apply(ServerConfig::default()).is_err());

        let args = ConfigArgs { tts: Some(TtsChoice::CustomProxy), ..Default::default() };
        assert!(args.apply(ServerConfig::default()).is_err());
    }

    #[test]
    fn url_flag_for_wrong_provider_is_rejected() {
        let args = ConfigArgs {
            tts: Some(TtsChoice::PlaceholderError),
            tts_url: Some("http://tts".into()),
            ..Default::default()
        };
        assert!(matches!(args.apply(ServerConfig::default()), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn switching_provider_replaces_variant() {
        let base = ServerConfig {
            chat: ChatProvider::Gemini { model: "m".into() },
            tts: TtsProvider::CustomProxy { url: "http://tts".into() },
            ..Default::default()
        };
        let args = ConfigArgs {
            chat: Some(ChatChoice::Disabled),
            tts: Some(TtsChoice::PlaceholderError),
            ..Default::default()
        };
        let config = args.apply(base).unwrap();
        assert_eq!(config.chat, ChatProvider::Disabled);
        assert_eq!(config.tts, TtsProvider::PlaceholderError);
    }
}
