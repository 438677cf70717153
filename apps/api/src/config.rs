use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or unparsable.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub generation_timeout: Duration,
    /// Bearer token gating the wizard API. `None` leaves it open.
    pub access_token: Option<String>,
    /// Wizards untouched for longer than this are dropped.
    pub wizard_idle_ttl: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            generation_timeout: Duration::from_secs(
                std::env::var("GENERATION_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse::<u64>()
                    .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            access_token: std::env::var("WIZARD_ACCESS_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
            wizard_idle_ttl: Duration::from_secs(
                std::env::var("WIZARD_IDLE_TTL_SECS")
                    .unwrap_or_else(|_| "86400".to_string())
                    .parse::<u64>()
                    .context("WIZARD_IDLE_TTL_SECS must be a whole number of seconds")?,
            ),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
