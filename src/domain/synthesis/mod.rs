//! Synthesis domain: fragment selection and literal handling.

pub mod fragment;
pub mod literal;

pub use fragment::{ChatFragment, Fragment, ProgramPlan, TtsFragment};
pub use literal::{LiteralIssue, LiteralWarning, chat_completions_url, lint_literals, strip_trailing_slash};
