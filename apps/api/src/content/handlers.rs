use axum::{extract::State, Json};
use serde::Serialize;

use super::models::{Certificate, EventItem, Experience, Project, SkillGroup};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExperienceResponse {
    pub work: Vec<Experience>,
    pub leadership: Vec<Experience>,
}

/// GET /api/v1/content/experience
pub async fn handle_experience(State(state): State<AppState>) -> Json<ExperienceResponse> {
    Json(ExperienceResponse {
        work: state.content.work_experience().to_vec(),
        leadership: state.content.leadership_experience().to_vec(),
    })
}

/// GET /api/v1/content/projects
pub async fn handle_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.content.projects().to_vec())
}

/// GET /api/v1/content/certificates
pub async fn handle_certificates(State(state): State<AppState>) -> Json<Vec<Certificate>> {
    Json(state.content.certificates().to_vec())
}

/// GET /api/v1/content/events
pub async fn handle_events(State(state): State<AppState>) -> Json<Vec<EventItem>> {
    Json(state.content.events().to_vec())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsResponse {
    pub skills: Vec<String>,
    pub resume_skills: Vec<SkillGroup>,
}

/// GET /api/v1/content/skills
pub async fn handle_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: state.content.skills().to_vec(),
        resume_skills: state.content.resume_skills().to_vec(),
    })
}
