// src/routes/mod.rs
pub mod chat;

use crate::{message::HealthResponse, state::SharedState};
use axum::{
    Json, Router,
    extract::Request,
    http::{
        HeaderValue,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
        },
    },
    routing::{any, post},
};
use chat::{chat_handler, method_not_allowed_handler, preflight_handler};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use uuid::Uuid;

pub fn create_router() -> Router<SharedState> {
    let chat_route = post(chat_handler)
        .options(preflight_handler)
        .fallback(method_not_allowed_handler);

    Router::new()
        .route("/chat", chat_route)
        .route("/health", any(health_handler))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .layer(TraceLayer::new_for_http().make_span_with(|req: &Request| {
            tracing::info_span!(
                "request",
                id = %Uuid::new_v4(),
                method = %req.method(),
                uri = %req.uri(),
            )
        }))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
