use std::sync::Arc;

use tokio::sync::RwLock;

use crate::chat::fallback::LocalResponder;
use crate::chat::ChatBackend;
use crate::config::Config;
use crate::contact::FormRelay;
use crate::content::ContentStore;
use crate::discovery::ProjectDiscovery;
use crate::reference::StandingsFeed;
use crate::sync::{ProfileLookup, SyncState};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentStore>,
    /// Standings-like reference data. Default: the static in-process feed.
    pub feed: Arc<dyn StandingsFeed>,
    /// `None` when no generative API key is configured — chat then uses the
    /// local responder unconditionally.
    pub llm: Option<Arc<dyn ChatBackend>>,
    pub responder: Arc<LocalResponder>,
    pub relay: Arc<dyn FormRelay>,
    pub lookup: Arc<dyn ProfileLookup>,
    pub discovery: Arc<dyn ProjectDiscovery>,
    /// Current display profile plus any staged sync candidate. The only
    /// mutable state the service holds.
    pub profile: Arc<RwLock<SyncState>>,
    pub config: Config,
}
