// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ChatResponse;

pub const INVALID_BODY: &str = "Invalid request format or missing prompt";
pub const MISSING_SESSION_ID: &str = "sessionId is required in query parameters";
pub const MISSING_PROMPT: &str = "prompt is required in request body";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    MissingVar(&'static str),

    #[error("invalid SERVER_ADDR {value:?}: {reason}")]
    InvalidAddr { value: String, reason: String },
}

/// Failures talking to the remote agent. The detail is for logs only.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent invocation failed: {0}")]
    Invoke(String),

    #[error("agent response stream failed: {0}")]
    Stream(String),
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("failed to invoke agent")]
    InvokeFailed,
}

/// Errors surfaced to HTTP callers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("Only POST method is allowed")]
    MethodNotAllowed,

    #[error("Failed to invoke Bedrock Agent")]
    Upstream,
}

impl From<ChatError> for AppError {
    fn from(_: ChatError) -> Self {
        AppError::Upstream
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ChatResponse::error(self.to_string()))).into_response()
    }
}
