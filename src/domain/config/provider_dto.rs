//! Strict on-disk shape of the `[chat]` and `[tts]` tables.
//!
//! Every key any provider accepts is listed here, and a key that does not belong
//! to the selected provider is an error rather than silently dropped.

use serde::Deserialize;

use super::{ChatProvider, TtsProvider, default_gemini_model};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatProviderKind {
    Disabled,
    Gemini,
    CustomProxy,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatProviderDto {
    pub provider: ChatProviderKind,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtsProviderKind {
    Disabled,
    PlaceholderError,
    CustomProxy,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsProviderDto {
    pub provider: TtsProviderKind,
    pub url: Option<String>,
}

fn unexpected(table: &str, key: &str, provider: &str) -> String {
    format!("{}.{} is only valid with provider = \"{}\"", table, key, provider)
}

impl TryFrom<ChatProviderDto> for ChatProvider {
    type Error = String;

    fn try_from(dto: ChatProviderDto) -> Result<Self, Self::Error> {
        if dto.model.is_some() && !matches!(dto.provider, ChatProviderKind::Gemini) {
            return Err(unexpected("chat", "model", "gemini"));
        }
        if dto.base_url.is_some() && !matches!(dto.provider, ChatProviderKind::CustomProxy) {
            return Err(unexpected("chat", "base_url", "custom_proxy"));
        }

        Ok(match dto.provider {
            ChatProviderKind::Disabled => ChatProvider::Disabled,
            ChatProviderKind::Gemini => {
                ChatProvider::Gemini { model: dto.model.unwrap_or_else(default_gemini_model) }
            }
            ChatProviderKind::CustomProxy => {
                let base_url = dto
                    .base_url
                    .ok_or_else(|| "chat.base_url is required with provider = \"custom_proxy\"".to_string())?;
                ChatProvider::CustomProxy { base_url }
            }
        })
    }
}

impl TryFrom<TtsProviderDto> for TtsProvider {
    type Error = String;

    fn try_from(dto: TtsProviderDto) -> Result<Self, Self::Error> {
        if dto.url.is_some() && !matches!(dto.provider, TtsProviderKind::CustomProxy) {
            return Err(unexpected("tts", "url", "custom_proxy"));
        }

        Ok(match dto.provider {
            TtsProviderKind::Disabled => TtsProvider::Disabled,
            TtsProviderKind::PlaceholderError => TtsProvider::PlaceholderError,
            TtsProviderKind::CustomProxy => {
                let url = dto
                    .url
                    .ok_or_else(|| "tts.url is required with provider = \"custom_proxy\"".to_string())?;
                TtsProvider::CustomProxy { url }
            }
        })
    }
}
