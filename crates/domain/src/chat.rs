use serde::{Deserialize, Serialize};

/// A message in the conversation transcript (provider-agnostic).
///
/// The transcript is request-scoped and append-only: the orchestrator builds
/// it from the caller's history, appends the user turn, and grows it with
/// assistant output and tool-result system entries as the protocol advances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

// ── Convenience constructors ───────────────────────────────────────

impl ChatMessage {
    pub fn system(text: impl Into<String>) -> Self {
        Self { role: Role::System, content: text.into() }
    }
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, content: text.into() }
    }
    pub fn assistant(text: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: text.into() }
    }
}

/// Whether a transcript already carries a system entry anywhere.
///
/// Invariant: at most one system entry per transcript, inserted first when
/// absent.
pub fn has_system_entry(transcript: &[ChatMessage]) -> bool {
    transcript.iter().any(|m| m.role == Role::System)
}
