//! Adapter over the Bedrock Agent Runtime `InvokeAgent` call.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_bedrockagentruntime::{
    Client, error::DisplayErrorContext, operation::invoke_agent::builders::InvokeAgentFluentBuilder,
    primitives::Blob, types::ResponseStream,
};
use futures::{
    StreamExt, future,
    stream::{self, BoxStream, Stream},
};
use tracing::debug;

use crate::{config::Config, error::AgentError};

/// One item of the remote agent's response stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentEvent {
    /// Raw bytes of the answer text.
    Chunk(Vec<u8>),
    /// Diagnostic event, never part of the answer.
    Trace(String),
}

pub type AgentStream = BoxStream<'static, Result<AgentEvent, AgentError>>;

/// Capability to start a conversation turn with the remote agent.
#[async_trait]
pub trait AgentInvoker: Send + Sync {
    /// Starts the turn and hands back its event stream. The remote session is
    /// never ended by this call.
    async fn invoke(&self, session_id: &str, prompt: &str) -> Result<AgentStream, AgentError>;
}

#[derive(Debug, Clone)]
pub struct BedrockAgent {
    client: Client,
    agent_id: String,
    agent_alias_id: String,
}

impl BedrockAgent {
    pub fn new(client: Client, agent_id: impl Into<String>, agent_alias_id: impl Into<String>) -> Self {
        Self {
            client,
            agent_id: agent_id.into(),
            agent_alias_id: agent_alias_id.into(),
        }
    }

    /// Builds a client from the AWS default credential and region chain.
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        debug!(region = ?sdk_config.region(), "loaded AWS SDK config");
        Self::new(Client::new(&sdk_config), &config.agent_id, &config.agent_alias_id)
    }
}

#[async_trait]
impl AgentInvoker for BedrockAgent {
    async fn invoke(&self, session_id: &str, prompt: &str) -> Result<AgentStream, AgentError> {
        let output = self
            .invoke_request(session_id, prompt)
            .send()
            .await
            .map_err(|e| AgentError::Invoke(DisplayErrorContext(&e).to_string()))?;

        let raw = stream::unfold(output.completion, |mut receiver| async move {
            match receiver.recv().await {
                Ok(Some(event)) => Some((Ok(event), receiver)),
                Ok(None) => None,
                Err(e) => {
                    let err = AgentError::Stream(DisplayErrorContext(&e).to_string());
                    Some((Err(err), receiver))
                }
            }
        });

        Ok(into_agent_events(raw))
    }
}

impl BedrockAgent {
    fn invoke_request(&self, session_id: &str, prompt: &str) -> InvokeAgentFluentBuilder {
        self.client
            .invoke_agent()
            .agent_id(&self.agent_id)
            .agent_alias_id(&self.agent_alias_id)
            .session_id(session_id)
            .input_text(prompt)
            .end_session(false)
    }
}

/// Keeps chunks and traces, drops other event kinds, and stops after the
/// first error.
fn into_agent_events<S>(raw: S) -> AgentStream
where
    S: Stream<Item = Result<ResponseStream, AgentError>> + Send + 'static,
{
    let events = raw
        .scan(false, |failed, item| {
            if *failed {
                return future::ready(None);
            }
            *failed = item.is_err();
            future::ready(Some(item))
        })
        .filter_map(|item| {
            future::ready(match item {
                Ok(event) => to_agent_event(event).map(Ok),
                Err(e) => Some(Err(e)),
            })
        });

    Box::pin(events)
}

fn to_agent_event(event: ResponseStream) -> Option<AgentEvent> {
    match event {
        ResponseStream::Chunk(part) => Some(AgentEvent::Chunk(
            part.bytes.map(Blob::into_inner).unwrap_or_default(),
        )),
        ResponseStream::Trace(trace) => Some(AgentEvent::Trace(format!("{trace:?}"))),
        _ => None,
    }
}
