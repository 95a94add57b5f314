mod chat;
mod config;
mod contact;
mod content;
mod discovery;
mod errors;
mod reference;
mod routes;
mod state;
mod sync;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::fallback::{LocalResponder, ResponderConfig};
use crate::chat::gemini::GeminiClient;
use crate::chat::ChatBackend;
use crate::config::Config;
use crate::contact::{FormRelay, HttpFormRelay};
use crate::content::ContentStore;
use crate::discovery::{ProjectDiscovery, StaticProjectDiscovery};
use crate::reference::{standings_snapshot, StandingsFeed, StaticStandingsFeed};
use crate::routes::build_router;
use crate::state::AppState;
use crate::sync::{ProfileLookup, StaticProfileLookup, SyncState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Seed the static content store
    let content = Arc::new(ContentStore::seeded());
    info!("Content store seeded for {}", content.profile().name);

    let feed: Arc<dyn StandingsFeed> = Arc::new(StaticStandingsFeed);

    // The hosted chat path is optional: no key means the local responder
    // handles every turn.
    let llm: Option<Arc<dyn ChatBackend>> = config
        .gemini_api_key
        .clone()
        .map(|key| Arc::new(GeminiClient::new(key)) as Arc<dyn ChatBackend>);
    match &llm {
        Some(_) => info!("Gemini client initialized (model: {})", chat::gemini::MODEL),
        None => info!("No GEMINI_API_KEY set; chat will use the local responder"),
    }

    let responder = Arc::new(LocalResponder::new(
        content.clone(),
        standings_snapshot(),
        ResponderConfig::default(),
    ));

    let relay: Arc<dyn FormRelay> = Arc::new(HttpFormRelay::new(config.form_relay_url.clone()));
    let lookup: Arc<dyn ProfileLookup> = Arc::new(StaticProfileLookup);
    let discovery: Arc<dyn ProjectDiscovery> = Arc::new(StaticProjectDiscovery);
    let profile = Arc::new(RwLock::new(SyncState::new(content.profile().clone())));

    let state = AppState {
        content,
        feed,
        llm,
        responder,
        relay,
        lookup,
        discovery,
        profile,
        config,
    };

    let addr: SocketAddr = format!("0.0.0.0:{}", state.config.port).parse()?;

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
