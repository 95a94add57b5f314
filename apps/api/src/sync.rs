//! Profile Synchronization Trigger — fetches updated profile fields from an
//! external lookup, stages the merged candidate, and exposes an apply action
//! that replaces the displayed profile wholesale with a sync timestamp.
//!
//! The lookup is an external collaborator behind the `ProfileLookup` seam:
//! current name and title in, optional updated bundle out, nothing more.
//! Lookup failures are logged and reported as "no updates" — the sync path
//! never surfaces an error to the page.

use async_trait::async_trait;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::content::models::{Profile, SyncedProfile};
use crate::errors::AppError;
use crate::state::AppState;

/// The bundle an external lookup may return for the portfolio owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub title: String,
    pub company: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Carried in `AppState` as `Arc<dyn ProfileLookup>`.
#[async_trait]
pub trait ProfileLookup: Send + Sync {
    async fn check(
        &self,
        name: &str,
        current_title: &str,
    ) -> Result<Option<ProfileUpdate>, AppError>;
}

/// Fixed lookup result standing in for a real profile provider.
pub struct StaticProfileLookup;

#[async_trait]
impl ProfileLookup for StaticProfileLookup {
    async fn check(
        &self,
        _name: &str,
        current_title: &str,
    ) -> Result<Option<ProfileUpdate>, AppError> {
        Ok(Some(ProfileUpdate {
            title: current_title.to_string(),
            company: "Cadillac F1 Team (Aspiring)".to_string(),
            summary: "Engineer focused on High-Performance Embedded Systems & Motorsport."
                .to_string(),
            source_url: Some("https://www.linkedin.com/in/txniiii/".to_string()),
        }))
    }
}

/// The current display profile plus at most one staged sync candidate.
/// Lives behind `Arc<RwLock<_>>` in `AppState`; re-syncing replaces the stage.
#[derive(Debug, Clone)]
pub struct SyncState {
    current: SyncedProfile,
    staged: Option<SyncedProfile>,
}

impl SyncState {
    pub fn new(profile: Profile) -> Self {
        Self {
            current: profile.into(),
            staged: None,
        }
    }

    pub fn current(&self) -> &SyncedProfile {
        &self.current
    }

    pub fn staged(&self) -> Option<&SyncedProfile> {
        self.staged.as_ref()
    }

    /// Diffs the lookup result against the current profile field by field,
    /// stages the merged candidate, and returns the changed field names.
    pub fn stage(&mut self, update: ProfileUpdate) -> Vec<String> {
        let mut candidate = self.current.clone();
        let mut changed = Vec::new();

        if candidate.profile.title != update.title {
            candidate.profile.title = update.title;
            changed.push("title".to_string());
        }
        if candidate.company.as_deref() != Some(update.company.as_str()) {
            candidate.company = Some(update.company);
            changed.push("company".to_string());
        }
        if candidate.profile.about != update.summary {
            candidate.profile.about = update.summary;
            changed.push("about".to_string());
        }
        if candidate.source_url != update.source_url {
            candidate.source_url = update.source_url;
            changed.push("sourceUrl".to_string());
        }

        self.staged = Some(candidate);
        changed
    }

    /// Replaces the displayed profile wholesale with the staged candidate and
    /// records the synchronization timestamp. Consumes the stage.
    pub fn apply(&mut self, now: DateTime<Utc>) -> Result<SyncedProfile, AppError> {
        let mut staged = self
            .staged
            .take()
            .ok_or_else(|| AppError::Validation("no staged sync to apply".to_string()))?;
        staged.last_synced = Some(now);
        self.current = staged.clone();
        Ok(staged)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPreview {
    pub has_updates: bool,
    pub changed_fields: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staged: Option<SyncedProfile>,
}

impl SyncPreview {
    fn none() -> Self {
        SyncPreview {
            has_updates: false,
            changed_fields: Vec::new(),
            staged: None,
        }
    }
}

/// GET /api/v1/profile — the current (possibly synced) profile.
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<SyncedProfile> {
    Json(state.profile.read().await.current().clone())
}

/// POST /api/v1/profile/sync
///
/// Runs the external lookup once and stages the result. A lookup failure is
/// a silently skipped sync, not an error response.
pub async fn handle_sync(State(state): State<AppState>) -> Json<SyncPreview> {
    let (name, title) = {
        let guard = state.profile.read().await;
        (
            guard.current().profile.name.clone(),
            guard.current().profile.title.clone(),
        )
    };

    match state.lookup.check(&name, &title).await {
        Ok(Some(update)) => {
            let mut guard = state.profile.write().await;
            let changed_fields = guard.stage(update);
            Json(SyncPreview {
                has_updates: true,
                changed_fields,
                staged: guard.staged().cloned(),
            })
        }
        Ok(None) => Json(SyncPreview::none()),
        Err(e) => {
            warn!("profile lookup failed, sync skipped: {e}");
            Json(SyncPreview::none())
        }
    }
}

/// POST /api/v1/profile/sync/apply
pub async fn handle_sync_apply(
    State(state): State<AppState>,
) -> Result<Json<SyncedProfile>, AppError> {
    let mut guard = state.profile.write().await;
    let applied = guard.apply(Utc::now())?;
    Ok(Json(applied))
}
