use axum::{
    Json,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use tracing::{info, warn};

use crate::{
    error::{AppError, INVALID_BODY, MISSING_PROMPT, MISSING_SESSION_ID},
    message::{ChatQuery, ChatRequest, ChatResponse},
    state::SharedState,
};

pub const EMPTY_REPLY_PLACEHOLDER: &str =
    "Agent returned an empty response. Check agent configuration.";

pub async fn chat_handler(
    State(state): State<SharedState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    // Body is checked before the query string.
    // A JSON `null` body decodes to an empty request.
    let payload: ChatRequest = serde_json::from_slice::<Option<ChatRequest>>(&body)
        .map_err(|_| AppError::BadRequest(INVALID_BODY))?
        .unwrap_or_default();
    let query = query
        .map(|Query(pairs)| ChatQuery::from_pairs(pairs))
        .unwrap_or_default();

    let (session_id, prompt) = validate(query, payload)?;
    info!(session_id = %session_id, prompt = %prompt, "received chat request");

    let mut reply = state.chat.process(&session_id, &prompt).await?;

    if reply.is_empty() {
        warn!(session_id = %session_id, "agent returned an empty response");
        reply = EMPTY_REPLY_PLACEHOLDER.to_string();
    }

    Ok(Json(ChatResponse::reply(reply)))
}

/// CORS preflight. The headers come from the router layers.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}

fn validate(query: ChatQuery, payload: ChatRequest) -> Result<(String, String), AppError> {
    let session_id = query
        .session_id
        .filter(|s| !s.is_empty())
        .ok_or(AppError::BadRequest(MISSING_SESSION_ID))?;

    let prompt = payload
        .prompt
        .filter(|p| !p.is_empty())
        .ok_or(AppError::BadRequest(MISSING_PROMPT))?;

    Ok((session_id, prompt))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(session_id: Option<&str>) -> ChatQuery {
        ChatQuery { session_id: session_id.map(str::to_string) }
    }

    fn request(prompt: Option<&str>) -> ChatRequest {
        ChatRequest { prompt: prompt.map(str::to_string) }
    }

    #[test]
    fn session_id_is_checked_before_prompt() {
        let err = validate(query(None), request(None)).unwrap_err();
        assert_eq!(err.to_string(), MISSING_SESSION_ID);
    }

    #[test]
    fn empty_prompt_is_missing() {
        let err = validate(query(Some("s1")), request(Some(""))).unwrap_err();
        assert_eq!(err.to_string(), MISSING_PROMPT);
    }

    #[test]
    fn whitespace_prompt_is_accepted() {
        let (_, prompt) = validate(query(Some("s1")), request(Some("   "))).unwrap();
        assert_eq!(prompt, "   ");
    }

    #[test]
    fn prompt_is_passed_through_verbatim() {
        let (sid, prompt) = validate(query(Some("s1")), request(Some("  what is APR? "))).unwrap();
        assert_eq!(sid, "s1");
        assert_eq!(prompt, "  what is APR? ");
    }
}
