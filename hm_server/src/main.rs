//! Session-backed hangman web server.
//!
//! Serves the game page and JSON API, holding one game per browser session
//! in an in-memory store.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Error;
use pico_args::Arguments;
use tracing::info;

use hm_server::{
    api::{self, AppState},
    config::ServerConfig,
    logging,
    store::SessionStore,
};

const HELP: &str = "\
Run a hangman web server

USAGE:
  hm_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:7777]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  MAX_SESSIONS             Upper bound on concurrent sessions [default: 10000]
  RUST_LOG                 Log filter (e.g., info, hm_server=debug)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let bind_override: Option<SocketAddr> = pargs
        .opt_value_from_str("--bind")
        .map_err(|e| anyhow::anyhow!("Invalid --bind address: {}", e))?;

    let config = ServerConfig::from_env(bind_override)?;
    config.validate()?;

    logging::init();
    info!("Starting hangman server at {}", config.bind);

    let words: Vec<String> = hangman::constants::WORDS
        .iter()
        .map(|w| w.to_string())
        .collect();
    info!("Loaded {} words", words.len());

    let state = AppState {
        store: Arc::new(SessionStore::new(config.max_sessions)),
        words: Arc::new(words),
    };

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
}
