use serde::{Deserialize, Serialize};

use super::wire::{QueryResponse, ThreadMessage};

/// Placeholder answer appended when the query service cannot be reached.
pub const QUERY_ERROR_TEXT: &str = "Error connecting to AI service.";

/// Role of a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Delivery state of a message.
///
/// A question is appended as `Pending` before the backend answers and is
/// finalized once the call resolves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    Pending,
    #[default]
    Delivered,
    Failed,
}

/// A single entry of the live conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    #[serde(default)]
    pub suggested_follow_ups: Vec<String>,
    #[serde(default)]
    pub next_steps: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Question that produced this entry (the question itself for user
    /// messages).
    #[serde(default)]
    pub question: String,
    /// Thumbs up/down feedback. `None` until the user rates the answer.
    #[serde(default)]
    pub liked: Option<bool>,
    #[serde(default)]
    pub delivery: Delivery,
}

impl Message {
    /// A question typed by the user, not yet answered.
    pub fn pending_question(question: &str) -> Self {
        Self {
            role: MessageRole::User,
            content: question.to_string(),
            suggested_follow_ups: Vec::new(),
            next_steps: String::new(),
            confidence: None,
            question: question.to_string(),
            liked: None,
            delivery: Delivery::Pending,
        }
    }

    /// Assistant entry built from a successful query response.
    pub fn answer(question: &str, response: QueryResponse) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: response.answer,
            suggested_follow_ups: response.suggested_follow_ups,
            next_steps: response.next_steps,
            confidence: response.confidence,
            question: question.to_string(),
            liked: None,
            delivery: Delivery::Delivered,
        }
    }

    /// Assistant entry standing in for a failed query.
    pub fn query_error(question: &str) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: QUERY_ERROR_TEXT.to_string(),
            suggested_follow_ups: Vec::new(),
            next_steps: String::new(),
            confidence: None,
            question: question.to_string(),
            liked: None,
            delivery: Delivery::Failed,
        }
    }

    /// Message restored from a stored thread. Only role and content survive.
    pub fn from_thread(message: ThreadMessage) -> Self {
        Self {
            role: message.role,
            content: message.content,
            suggested_follow_ups: Vec::new(),
            next_steps: String::new(),
            confidence: None,
            question: String::new(),
            liked: None,
            delivery: Delivery::Delivered,
        }
    }

    pub fn is_assistant(&self) -> bool {
        self.role == MessageRole::Assistant
    }
}
