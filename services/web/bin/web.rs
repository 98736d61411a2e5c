//! Main Entrypoint for the Math Mastermind Web Service
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment.
//! 2. Initializing logging.
//! 3. Constructing the solver client for the configured provider.
//! 4. Constructing the Axum router with a fresh session history.
//! 5. Starting the web server and handling graceful shutdown.

use anyhow::Context;
use async_openai::config::OpenAIConfig;
use mastermind_core::{
    history::HistoryStore,
    solver::{MathSolver, OpenAICompatibleSolver},
};
use mastermind_web::{
    config::{Config, Provider},
    router::create_router,
    state::AppState,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Listens for the `Ctrl+C` signal to gracefully shut down the server.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Received shutdown signal. Shutting down gracefully...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .init();
    info!("Configuration loaded. Initializing application state...");

    // --- 3. Initialize the Solver Client ---
    // A missing credential is deliberately not fatal: requests will come
    // back as an `Error: ...` answer until the key is provided.
    let api_key = config.api_key();
    let (key_var, api_base) = match config.provider {
        Provider::OpenAI => ("OPENAI_API_KEY", "https://api.openai.com/v1/"),
        Provider::Gemini => (
            "GEMINI_API_KEY",
            "https://generativelanguage.googleapis.com/v1beta/openai",
        ),
    };
    if api_key.is_none() {
        warn!("{key_var} is not set; every request will fail until it is provided");
    }

    let openai_config = OpenAIConfig::new()
        .with_api_key(api_key.unwrap_or_default())
        .with_api_base(api_base);
    let solver: Arc<dyn MathSolver> = Arc::new(OpenAICompatibleSolver::new(
        openai_config,
        config.chat_model.clone(),
    ));

    // --- 4. Create Application State and Router ---
    let app_state = Arc::new(AppState {
        solver,
        history: Mutex::new(HistoryStore::new()),
        config: Arc::new(config.clone()),
    });
    let app = create_router(app_state);

    // --- 5. Start Server ---
    info!(
        provider = ?config.provider,
        model = %config.chat_model,
        bind_address = %config.bind_address,
        "Service configured. Starting server..."
    );
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server has shut down.");
    Ok(())
}
