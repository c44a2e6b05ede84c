// src/config.rs
use std::net::SocketAddr;

use tracing::warn;

use crate::error::ConfigError;

pub const AGENT_ID_VAR: &str = "BEDROCK_AGENT_ID";
pub const AGENT_ALIAS_ID_VAR: &str = "BEDROCK_AGENT_ALIAS_ID";
pub const SERVER_ADDR_VAR: &str = "SERVER_ADDR";
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub agent_id: String,
    pub agent_alias_id: String,
    pub server_addr: SocketAddr,
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            warn!("no .env file loaded ({e}), relying on system environment variables");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };

        let agent_id = required(AGENT_ID_VAR)?;
        let agent_alias_id = required(AGENT_ALIAS_ID_VAR)?;

        let raw_addr = lookup(SERVER_ADDR_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());
        let server_addr = raw_addr
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidAddr {
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self { agent_id, agent_alias_id, server_addr })
    }
}
