mod auth;
mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod normalizer;
mod routes;
mod state;
mod templates;
mod wizard;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::gateway::GenerationGateway;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::wizard::service::WizardService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerForge API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the generation client
    let gemini = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_base_url.clone(),
        config.generation_timeout,
    )?;
    info!(
        "Generation client initialized (model: {}, timeout: {}s)",
        llm_client::MODEL,
        config.generation_timeout.as_secs()
    );
    let gateway = GenerationGateway::new(Arc::new(gemini));

    if config.access_token.is_none() {
        warn!("WIZARD_ACCESS_TOKEN is not set; the wizard API is open to every caller");
    }

    // Build app state
    let state = AppState {
        wizards: WizardService::new(gateway, config.wizard_idle_ttl),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
