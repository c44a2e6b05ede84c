// src/state.rs
use std::sync::Arc;

use crate::services::{agent::AgentInvoker, chat_service::ChatService};

pub type SharedState = Arc<AppState>;

#[derive(Debug, Clone)]
pub struct AppState {
    pub chat: ChatService,
}

impl AppState {
    pub fn new(agent: Arc<dyn AgentInvoker>) -> Self {
        Self {
            chat: ChatService::new(agent),
        }
    }
}
