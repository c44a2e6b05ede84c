use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};

use financial_chatbot::{
    config::Config, routes, services::agent::BedrockAgent, state::AppState,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("loading configuration")?;

    let agent = BedrockAgent::from_config(&config).await;
    let state = Arc::new(AppState::new(Arc::new(agent)));

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.server_addr)
        .await
        .with_context(|| format!("binding {}", config.server_addr))?;

    info!("server starting on {}", config.server_addr);
    info!("chat endpoint: http://{}/chat", config.server_addr);
    axum::serve(listener, app).await.context("serving HTTP")?;

    Ok(())
}
