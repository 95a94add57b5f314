use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The generative API key is deliberately optional: its absence is the
/// documented trigger for the chat endpoint's local fallback responder.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub form_relay_url: String,
    pub port: u16,
    pub rust_log: String,
}

const DEFAULT_FORM_RELAY_URL: &str = "https://formsubmit.co/ajax/mabautista358@gmail.com";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            form_relay_url: std::env::var("FORM_RELAY_URL")
                .unwrap_or_else(|_| DEFAULT_FORM_RELAY_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Treats unset AND empty variables as absent, so `GEMINI_API_KEY=` in a
/// .env file still selects the fallback path.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
