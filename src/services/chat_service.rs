// src/services/chat_service.rs
use std::{fmt::Debug, sync::Arc};

use futures::StreamExt;
use tracing::{debug, error, info, warn};

use super::agent::{AgentEvent, AgentInvoker, AgentStream};
use crate::error::ChatError;

#[derive(Clone)]
pub struct ChatService {
    agent: Arc<dyn AgentInvoker>,
}

impl Debug for ChatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatService").finish_non_exhaustive()
    }
}

impl ChatService {
    pub fn new(agent: Arc<dyn AgentInvoker>) -> Self {
        Self { agent }
    }

    /// Sends one prompt to the agent and returns its whole answer. The answer
    /// may be empty; a stream that breaks midway still yields what arrived.
    pub async fn process(&self, session_id: &str, prompt: &str) -> Result<String, ChatError> {
        info!(session_id, "processing chat");

        let stream = self.agent.invoke(session_id, prompt).await.map_err(|e| {
            error!(session_id, error = %e, "agent invoke failed");
            ChatError::InvokeFailed
        })?;

        Ok(collect_answer(session_id, stream).await)
    }
}

async fn collect_answer(session_id: &str, mut stream: AgentStream) -> String {
    let mut answer = Vec::new();

    while let Some(event) = stream.next().await {
        match event {
            Ok(AgentEvent::Chunk(bytes)) => answer.extend_from_slice(&bytes),
            Ok(AgentEvent::Trace(trace)) => debug!(session_id, %trace, "agent trace"),
            Err(e) => {
                warn!(session_id, error = %e, "agent stream ended with error");
                break;
            }
        }
    }

    // Decode once so characters split across chunks stay intact.
    String::from_utf8_lossy(&answer).into_owned()
}
