/// Data structures for the Q&A chat
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Notice shown as the only bubble when the popup has no video context
pub const UNAVAILABLE_NOTICE: &str = "This feature only works on a YouTube video page.";

/// Placeholder text for the disabled question input
pub const UNAVAILABLE_PLACEHOLDER: &str = "Unavailable";

/// Bot bubble text when the backend returns no usable answer
pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't find an answer.";

/// Bot bubble text for any transport or backend failure
pub const BACKEND_ERROR_MESSAGE: &str = "Error: Could not connect to the backend service.";

/// Who a chat bubble originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl Role {
    /// CSS class the popup stylesheet keys bubbles on
    pub fn css_class(&self) -> &'static str {
        match self {
            Role::User => "user-message",
            Role::Bot => "bot-message",
        }
    }
}

/// A single rendered chat entry. Append-only; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub text: String,
    pub timestamp: f64,
}

impl ChatMessage {
    pub fn new(role: Role, text: String, timestamp: f64) -> ChatMessage {
        ChatMessage {
            id: Uuid::new_v4(),
            role,
            text,
            timestamp,
        }
    }
}

/// Request body for the backend chat endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub video_id: String,
    pub question: String,
}

/// Response body from the backend chat endpoint; other fields ignored
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

impl ChatResponse {
    /// The answer text, or the fixed fallback when absent or empty
    pub fn answer_or_fallback(self) -> String {
        match self.answer {
            Some(answer) if !answer.is_empty() => answer,
            _ => FALLBACK_ANSWER.to_string(),
        }
    }
}

/// Normalize raw input into a submittable question. Whitespace-only
/// input yields None, which callers treat as a no-op.
pub fn prepare_question(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
