//! Handling of user-supplied strings that end up as JavaScript string literals.
//!
//! Values are embedded verbatim. Nothing here rewrites a value; the lint only
//! reports strings that would change or break the generated program.

use std::fmt;

use serde::Serialize;
use url::Url;

use crate::domain::{ChatProvider, ServerConfig, TtsProvider};

/// Remove exactly one trailing `/`, leaving any others in place.
pub fn strip_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Target of the chat proxy derived from a configured base URL.
pub fn chat_completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", strip_trailing_slash(base_url))
}

/// What is wrong with an embedded literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LiteralIssue {
    /// A quote that terminates the surrounding string literal.
    Quote { character: char },
    /// Backslash escapes are interpreted by the JavaScript parser.
    Backslash,
    /// `${` would be interpolated where the value lands in a template literal.
    TemplateDelimiter,
    /// String literals cannot span lines.
    LineBreak,
    /// Proxy target is blank.
    EmptyUrl,
    /// Proxy target does not parse as an absolute URL.
    MalformedUrl { reason: String },
}

impl fmt::Display for LiteralIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralIssue::Quote { character } => {
                write!(f, "contains {:?}, which terminates the generated string literal", character)
            }
            LiteralIssue::Backslash => write!(f, "contains a backslash escape"),
            LiteralIssue::TemplateDelimiter => write!(f, "contains '${{', a template delimiter"),
            LiteralIssue::LineBreak => write!(f, "contains a line break"),
            LiteralIssue::EmptyUrl => write!(f, "is empty"),
            LiteralIssue::MalformedUrl { reason } => write!(f, "is not an absolute URL ({})", reason),
        }
    }
}

/// A single lint finding for one configuration field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiteralWarning {
    /// Dotted config path, e.g. `chat.base_url`.
    pub field: &'static str,
    pub value: String,
    pub issue: LiteralIssue,
}

impl fmt::Display for LiteralWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {}", self.field, self.value, self.issue)
    }
}

/// Report every user string that would not survive verbatim embedding.
pub fn lint_literals(config: &ServerConfig) -> Vec<LiteralWarning> {
    let mut warnings = Vec::new();

    match &config.chat {
        ChatProvider::Disabled => {}
        ChatProvider::Gemini { model } => {
            scan_characters("chat.model", model, &mut warnings);
        }
        ChatProvider::CustomProxy { base_url } => {
            scan_characters("chat.base_url", base_url, &mut warnings);
            scan_url("chat.base_url", base_url, &mut warnings);
        }
    }

    if let TtsProvider::CustomProxy { url } = &config.tts {
        scan_characters("tts.url", url, &mut warnings);
        scan_url("tts.url", url, &mut warnings);
    }

    warnings
}

fn scan_characters(field: &'static str, value: &str, warnings: &mut Vec<LiteralWarning>) {
    let mut push = |issue| warnings.push(LiteralWarning { field, value: value.to_string(), issue });

    for character in ['\'', '"', '`'] {
        if value.contains(character) {
            push(LiteralIssue::Quote { character });
        }
    }
    if value.contains('\\') {
        push(LiteralIssue::Backslash);
    }
    if value.contains("${") {
        push(LiteralIssue::TemplateDelimiter);
    }
    if value.contains(['\n', '\r']) {
        push(LiteralIssue::LineBreak);
    }
}

fn scan_url(field: &'static str, value: &str, warnings: &mut Vec<LiteralWarning>) {
    if value.trim().is_empty() {
        warnings.push(LiteralWarning { field, value: value.to_string(), issue: LiteralIssue::EmptyUrl });
        return;
    }
    if let Err(e) = Url::parse(value) {
        warnings.push(LiteralWarning {
            field,
            value: value.to_string(),
            issue: LiteralIssue::MalformedUrl { reason: e.to_string() },
        });
    }
}
