// src/message.rs
use serde::{Deserialize, Serialize};

pub const HEALTHY_STATUS: &str = "healthy";
pub const SERVICE_NAME: &str = "FinancialChatBot";

#[derive(Debug, Default)]
pub struct ChatQuery {
    pub session_id: Option<String>,
}

impl ChatQuery {
    /// Keeps the first `sessionId` when the key repeats.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let session_id = pairs
            .into_iter()
            .find(|(key, _)| key == "sessionId")
            .map(|(_, value)| value);
        Self { session_id }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Body of every `/chat` reply. Exactly one member is set.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(rename = "agentResponse", skip_serializing_if = "Option::is_none")]
    pub agent_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn reply(text: impl Into<String>) -> Self {
        Self { agent_response: Some(text.into()), error: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { agent_response: None, error: Some(message.into()) }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: HEALTHY_STATUS.to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}
