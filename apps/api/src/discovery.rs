//! Project discovery — an external lookup that surfaces additional projects
//! attributed to the portfolio owner, which the client appends to the static
//! project list.
//!
//! External collaborator behind the `ProjectDiscovery` seam, same contract
//! shape as the profile lookup: owner name in, zero or more discovered
//! projects out. A failed lookup degrades to an empty result; the discover
//! endpoint never surfaces an error.

use async_trait::async_trait;
use axum::{extract::State, Json};
use tracing::warn;

use crate::content::models::Project;
use crate::errors::AppError;
use crate::state::AppState;

/// Carried in `AppState` as `Arc<dyn ProjectDiscovery>`.
#[async_trait]
pub trait ProjectDiscovery: Send + Sync {
    async fn find(&self, name: &str) -> Result<Vec<Project>, AppError>;
}

/// Fixed discovery result standing in for a real project-crawl provider.
pub struct StaticProjectDiscovery;

#[async_trait]
impl ProjectDiscovery for StaticProjectDiscovery {
    async fn find(&self, _name: &str) -> Result<Vec<Project>, AppError> {
        Ok(vec![Project {
            id: "auto-1".to_string(),
            title: "Autonomous Drone Swarm".to_string(),
            category: "Robotics".to_string(),
            description: "Coordinated flight control utilizing ROS2 and PX4.".to_string(),
            long_description:
                "A discovered project: coordinated multi-drone flight control built on ROS2 \
                 and the PX4 autopilot stack."
                    .to_string(),
            technologies: vec!["C++".to_string(), "ROS2".to_string(), "PX4".to_string()],
            image: "https://picsum.photos/800/600?random=101".to_string(),
            link: None,
        }])
    }
}

/// Runs discovery for the given owner, degrading to an empty list on failure.
pub async fn discover_for(discovery: &dyn ProjectDiscovery, name: &str) -> Vec<Project> {
    match discovery.find(name).await {
        Ok(projects) => projects,
        Err(e) => {
            warn!("project discovery failed, returning no results: {e}");
            Vec::new()
        }
    }
}

/// GET /api/v1/content/projects/discover
///
/// Discovered entries are additions for the client to append; the static
/// project list itself is never mutated.
pub async fn handle_discover_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    let name = state.profile.read().await.current().profile.name.clone();
    Json(discover_for(state.discovery.as_ref(), &name).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingDiscovery;

    #[async_trait]
    impl ProjectDiscovery for FailingDiscovery {
        async fn find(&self, _name: &str) -> Result<Vec<Project>, AppError> {
            Err(AppError::Upstream("discovery offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_static_discovery_returns_attributed_project() {
        let found = discover_for(&StaticProjectDiscovery, "Marco Antonio Bautista").await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "auto-1");
        assert_eq!(found[0].category, "Robotics");
        assert!(found[0].technologies.contains(&"ROS2".to_string()));
    }

    #[tokio::test]
    async fn test_discovery_failure_degrades_to_empty() {
        let found = discover_for(&FailingDiscovery, "Marco Antonio Bautista").await;
        assert!(found.is_empty());
    }
}
