//! Fragment selection: one tagged variant per endpoint/provider combination.

use minijinja::{Value, context};

use crate::domain::synthesis::literal::{chat_completions_url, strip_trailing_slash};
use crate::domain::{ChatProvider, ServerConfig, TtsProvider};

/// Body emitted for `POST /v1/chat/completions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatFragment {
    NotImplemented,
    Gemini { model: String },
    CustomProxy { upstream_url: String },
}

impl ChatFragment {
    pub fn from_provider(provider: &ChatProvider) -> Self {
        match provider {
            ChatProvider::Disabled => ChatFragment::NotImplemented,
            ChatProvider::Gemini { model } => ChatFragment::Gemini { model: model.clone() },
            ChatProvider::CustomProxy { base_url } => {
                ChatFragment::CustomProxy { upstream_url: chat_completions_url(base_url) }
            }
        }
    }

    pub fn template_name(&self) -> &'static str {
        match self {
            ChatFragment::NotImplemented => "chat/disabled.js.j2",
            ChatFragment::Gemini { .. } => "chat/gemini.js.j2",
            ChatFragment::CustomProxy { .. } => "chat/custom_proxy.js.j2",
        }
    }

    /// Bootstrap log status; may reference constants declared by the fragment.
    pub fn status_label(&self) -> &'static str {
        match self {
            ChatFragment::NotImplemented => "Placeholder",
            ChatFragment::Gemini { .. } => "ACTIVE - Using Gemini: ${GEMINI_MODEL}",
            ChatFragment::CustomProxy { .. } => "ACTIVE - Custom Proxy -> ${CHAT_UPSTREAM_URL}",
        }
    }

    fn context(&self) -> Value {
        match self {
            ChatFragment::NotImplemented => context! {},
            ChatFragment::Gemini { model } => context! { model => model },
            ChatFragment::CustomProxy { upstream_url } => context! { upstream_url => upstream_url },
        }
    }
}

/// Body emitted for `POST /v1/audio/speech`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TtsFragment {
    NotImplemented,
    UnsupportedVoice,
    CustomProxy { upstream_url: String },
}

impl TtsFragment {
    pub fn from_provider(provider: &TtsProvider) -> Self {
        match provider {
            TtsProvider::Disabled => TtsFragment::NotImplemented,
            TtsProvider::PlaceholderError => TtsFragment::UnsupportedVoice,
            TtsProvider::CustomProxy { url } => {
                TtsFragment::CustomProxy { upstream_url: strip_trailing_slash(url).to_string() }
            }
        }
    }

    pub fn template_name(&self) -> &'static str {
        match self {
            TtsFragment::NotImplemented => "tts/disabled.js.j2",
            TtsFragment::UnsupportedVoice => "tts/placeholder_error.js.j2",
            TtsFragment::CustomProxy { .. } => "tts/custom_proxy.js.j2",
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self {
            TtsFragment::NotImplemented => "Placeholder",
            TtsFragment::UnsupportedVoice => "ACTIVE - Unsupported Voice Placeholder",
            TtsFragment::CustomProxy { .. } => "ACTIVE - Custom Proxy -> ${TTS_UPSTREAM_URL}",
        }
    }

    fn context(&self) -> Value {
        match self {
            TtsFragment::NotImplemented | TtsFragment::UnsupportedVoice => context! {},
            TtsFragment::CustomProxy { upstream_url } => context! { upstream_url => upstream_url },
        }
    }
}

/// A unit of generated program text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Preamble {
        port: i64,
        default_width: i64,
        default_height: i64,
        http_fetch: bool,
        managed_chat: bool,
        not_implemented_helper: bool,
    },
    ImageGenerations,
    Chat(ChatFragment),
    Tts(TtsFragment),
    Bootstrap { chat_status: &'static str, tts_status: &'static str },
}

impl Fragment {
    pub fn template_name(&self) -> &'static str {
        match self {
            Fragment::Preamble { .. } => "preamble.js.j2",
            Fragment::ImageGenerations => "image_generations.js.j2",
            Fragment::Chat(chat) => chat.template_name(),
            Fragment::Tts(tts) => tts.template_name(),
            Fragment::Bootstrap { .. } => "bootstrap.js.j2",
        }
    }

    /// Interpolation values for this fragment's template.
    pub fn context(&self) -> Value {
        match self {
            Fragment::Preamble {
                port,
                default_width,
                default_height,
                http_fetch,
                managed_chat,
                not_implemented_helper,
            } => context! {
                port => port,
                default_width => default_width,
                default_height => default_height,
                http_fetch => http_fetch,
                managed_chat => managed_chat,
                not_implemented_helper => not_implemented_helper,
            },
            Fragment::ImageGenerations => context! {},
            Fragment::Chat(chat) => chat.context(),
            Fragment::Tts(tts) => tts.context(),
            Fragment::Bootstrap { chat_status, tts_status } => context! {
                chat_status => chat_status,
                tts_status => tts_status,
            },
        }
    }
}

/// Ordered fragment selection for one configuration.
///
/// Order is fixed: preamble, image, chat, tts, bootstrap. Exactly one chat and
/// one tts fragment is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramPlan {
    fragments: Vec<Fragment>,
}

impl ProgramPlan {
    pub fn from_config(config: &ServerConfig) -> Self {
        let chat = ChatFragment::from_provider(&config.chat);
        let tts = TtsFragment::from_provider(&config.tts);

        let preamble = Fragment::Preamble {
            port: config.port,
            default_width: config.default_width,
            default_height: config.default_height,
            http_fetch: config.uses_custom_proxy(),
            managed_chat: config.chat.is_managed(),
            not_implemented_helper: config.has_disabled_endpoint(),
        };
        let bootstrap =
            Fragment::Bootstrap { chat_status: chat.status_label(), tts_status: tts.status_label() };

        Self {
            fragments: vec![
                preamble,
                Fragment::ImageGenerations,
                Fragment::Chat(chat),
                Fragment::Tts(tts),
                bootstrap,
            ],
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn template_names(&self) -> Vec<&'static str> {
        self.fragments.iter().map(Fragment::template_name).collect()
    }
}
