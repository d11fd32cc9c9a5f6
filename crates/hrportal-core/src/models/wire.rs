//! Request and response bodies exchanged with the portal backend.

use serde::{Deserialize, Serialize};

use super::message::MessageRole;
use super::role::{PolicyRegion, Role};
use super::serde_util::null_as_default;

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub department: String,
    pub country: PolicyRegion,
}

/// Body of `POST /query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    pub policy_country: PolicyRegion,
    pub department: String,
}

/// Answer returned by `POST /query`. Every field may be absent or null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggested_follow_ups: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub next_steps: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// One message of a stored thread from `GET /history/thread/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadMessage {
    pub role: MessageRole,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}
