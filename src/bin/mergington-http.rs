use clap::Parser;
use mergington_http::{self, server::ServerConfig};
use std::path::PathBuf;

/// Mergington HTTP API Server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Directory holding the front-end assets served under /static
    #[arg(short, long, default_value = "static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Note: We don't initialize tracing here because it's already initialized
    // in the library

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        log_level: cli.log_level,
        static_dir: cli.static_dir,
    };

    println!(
        "Starting Mergington HTTP server on {}:{}",
        config.host, config.port
    );
    mergington_http::start_with_config(config).await?;

    Ok(())
}
