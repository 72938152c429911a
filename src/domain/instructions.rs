//! Human-readable setup steps shown alongside the generated program.

use serde::Serialize;

use crate::domain::artifact::{ENV_FILE_NAME, GEMINI_API_KEY_VAR, SERVER_FILE_NAME};
use crate::domain::{ChatProvider, DependencySet, ServerConfig, TtsProvider};

/// One numbered setup step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionStep {
    /// 1-based position, assigned after the step list is assembled.
    pub number: usize,
    pub title: String,
    pub body: String,
    /// Text meant to be copied verbatim (a shell command, file content or URL).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

struct Draft {
    title: &'static str,
    body: String,
    command: Option<String>,
    note: Option<String>,
}

/// Compose the setup steps for `config`.
///
/// The install step embeds `dependencies` as-is; callers pass the same set they
/// publish so the two can never disagree.
pub fn compose(config: &ServerConfig, dependencies: &DependencySet) -> Vec<InstructionStep> {
    let mut drafts = vec![Draft {
        title: "Save the Code",
        body: format!("Copy the code above and save it in a file named {}.", SERVER_FILE_NAME),
        command: None,
        note: None,
    }];

    if config.chat.is_managed() {
        drafts.push(Draft {
            title: "Set Your Gemini API Key",
            body: format!(
                "In the same folder, create a file named {} containing your Google AI Studio key:",
                ENV_FILE_NAME
            ),
            command: Some(format!("{}=your_api_key_here", GEMINI_API_KEY_VAR)),
            note: Some("Keep this file private; the server refuses chat requests without it.".into()),
        });
    }

    drafts.push(Draft {
        title: "Install Dependencies",
        body: "Open a terminal or command prompt in the folder where you saved the file. \
               You need Node.js installed. Run:"
            .into(),
        command: Some(dependencies.install_command()),
        note: None,
    });

    drafts.push(Draft {
        title: "Run the Server",
        body: "In the same terminal, run:".into(),
        command: Some(format!("node {}", SERVER_FILE_NAME)),
        note: None,
    });

    drafts.push(Draft {
        title: "Configure Your App",
        body: "In your application's API settings (e.g., SillyTavern), set the endpoint to:".into(),
        command: Some(format!("http://localhost:{}/v1", config.port)),
        note: Some(capability_summary(config)),
    });

    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| InstructionStep {
            number: index + 1,
            title: draft.title.to_string(),
            body: draft.body,
            command: draft.command,
            note: draft.note,
        })
        .collect()
}

fn capability_summary(config: &ServerConfig) -> String {
    let mut active = vec!["image generation"];
    match config.chat {
        ChatProvider::Disabled => {}
        ChatProvider::Gemini { .. } => active.push("chat completions via Gemini"),
        ChatProvider::CustomProxy { .. } => active.push("chat completions via your proxy"),
    }
    match config.tts {
        TtsProvider::Disabled => {}
        TtsProvider::PlaceholderError => active.push("speech requests with an unsupported-voice error"),
        TtsProvider::CustomProxy { .. } => active.push("speech via your TTS proxy"),
    }

    let mut summary = format!("Set the API type to \"OpenAI\". The server will now handle {}", join_list(&active));
    if config.has_disabled_endpoint() {
        summary.push_str(" and provide valid error responses for other endpoints");
    }
    summary.push('.');
    summary
}

fn join_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

/// Render steps as plain text in `Step N: Title` form.
pub fn render_instructions(steps: &[InstructionStep]) -> String {
    let mut out = String::new();
    for (i, step) in steps.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("Step {}: {}\n", step.number, step.title));
        out.push_str(&step.body);
        out.push('\n');
        if let Some(command) = &step.command {
            out.push_str(&format!("    {}\n", command));
        }
        if let Some(note) = &step.note {
            out.push_str(note);
            out.push('\n');
        }
    }
    out
}
