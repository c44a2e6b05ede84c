#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::stream;

use financial_chatbot::error::AgentError;
use financial_chatbot::services::agent::{AgentEvent, AgentInvoker, AgentStream};

/// Replays a fixed script for every invocation and records the calls.
#[derive(Default)]
pub struct ScriptedAgent {
    events: Vec<Result<AgentEvent, String>>,
    fail_invoke: bool,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedAgent {
    pub fn chunks(chunks: &[&str]) -> Self {
        Self::events(
            chunks
                .iter()
                .map(|c| Ok(AgentEvent::Chunk(c.as_bytes().to_vec())))
                .collect(),
        )
    }

    pub fn events(events: Vec<Result<AgentEvent, String>>) -> Self {
        Self { events, ..Default::default() }
    }

    pub fn failing() -> Self {
        Self { fail_invoke: true, ..Default::default() }
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl AgentInvoker for ScriptedAgent {
    async fn invoke(&self, session_id: &str, prompt: &str) -> Result<AgentStream, AgentError> {
        self.calls
            .lock()
            .unwrap()
            .push((session_id.to_string(), prompt.to_string()));

        if self.fail_invoke {
            return Err(AgentError::Invoke("access denied".to_string()));
        }

        let items: Vec<Result<AgentEvent, AgentError>> = self
            .events
            .iter()
            .cloned()
            .map(|e| e.map_err(AgentError::Stream))
            .collect();
        Ok(Box::pin(stream::iter(items)))
    }
}

pub fn trace(text: &str) -> Result<AgentEvent, String> {
    Ok(AgentEvent::Trace(text.to_string()))
}

pub fn chunk(text: &str) -> Result<AgentEvent, String> {
    Ok(AgentEvent::Chunk(text.as_bytes().to_vec()))
}
