pub mod agent;
pub mod chat_service;
