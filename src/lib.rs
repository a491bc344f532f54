//! Mergington HTTP API Server
//!
//! This crate provides the HTTP API for the Mergington High School
//! extracurricular activities service: list activities, sign a student up
//! by email, and unregister a student.

pub mod directory;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;

use server::{ServerConfig, start_server};
use tracing_subscriber::EnvFilter;

/// Start the server with the default configuration
pub async fn start() -> anyhow::Result<()> {
    let config = ServerConfig::default();

    // Initialize tracing for logging
    init_tracing(&config);

    // Start the server with the default configuration
    start_server(config).await
}

/// Start the server with a custom configuration
pub async fn start_with_config(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing for logging
    init_tracing(&config);

    // Start the server with the provided configuration
    start_server(config).await
}

// RUST_LOG wins over the configured level when both are present.
fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
