use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::directory::ActivityDirectory;
use crate::routes::create_api_router;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Log level used when RUST_LOG is not set
    pub log_level: String,

    /// Directory holding the front-end assets served under /static
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    /// The in-memory activity directory
    pub directory: ActivityDirectory,
}

/// Assemble the application router for the given config and state
pub fn build_app(config: &ServerConfig, state: AppState) -> Router {
    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_api_router()
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Seed the directory once; it lives for the whole process
    let state = AppState {
        directory: ActivityDirectory::with_defaults(),
    };
    info!(
        "Seeded activity directory with {} activities",
        state.directory.len()
    );

    let app = build_app(&config, state);

    // Parse the socket address
    let addr = format!("{}:{}", config.host, config.port)
        .parse::<SocketAddr>()
        .with_context(|| format!("invalid listen address {}:{}", config.host, config.port))?;

    // Start the server
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
