//! Content Store — the static structured data behind every section of the
//! portfolio: profile, experience, projects, certificates, events, skills.
//!
//! All records are read-only reference data seeded at startup. The profile is
//! the single exception: the sync trigger (`crate::sync`) may replace it
//! wholesale, which is why handlers read it from `AppState::profile` rather
//! than from here.

pub mod handlers;
pub mod models;
mod seed;

use self::models::{Certificate, EventItem, Experience, Profile, Project, SkillGroup};

/// Read-only store shared via `Arc` across handlers and the chat responder.
pub struct ContentStore {
    profile: Profile,
    contact_email: String,
    work_experience: Vec<Experience>,
    leadership_experience: Vec<Experience>,
    projects: Vec<Project>,
    certificates: Vec<Certificate>,
    events: Vec<EventItem>,
    skills: Vec<String>,
    resume_skills: Vec<SkillGroup>,
}

impl ContentStore {
    /// Builds the store with the full seeded dataset.
    pub fn seeded() -> Self {
        seed::build()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Direct contact address, surfaced when the form relay is unreachable
    /// and by the responder's contact reply.
    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    pub fn work_experience(&self) -> &[Experience] {
        &self.work_experience
    }

    pub fn leadership_experience(&self) -> &[Experience] {
        &self.leadership_experience
    }

    /// Work entries first, then leadership — display grouping order.
    pub fn experiences(&self) -> Vec<&Experience> {
        self.work_experience
            .iter()
            .chain(self.leadership_experience.iter())
            .collect()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    pub fn events(&self) -> &[EventItem] {
        &self.events
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn resume_skills(&self) -> &[SkillGroup] {
        &self.resume_skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::models::EventStatus;

    #[test]
    fn test_seeded_store_record_counts() {
        let store = ContentStore::seeded();
        assert_eq!(store.work_experience().len(), 2);
        assert_eq!(store.leadership_experience().len(), 2);
        assert_eq!(store.projects().len(), 6);
        assert_eq!(store.certificates().len(), 10);
        assert_eq!(store.events().len(), 4);
        assert_eq!(store.skills().len(), 12);
        assert_eq!(store.resume_skills().len(), 7);
    }

    #[test]
    fn test_experiences_lists_work_before_leadership() {
        let store = ContentStore::seeded();
        let all = store.experiences();
        assert_eq!(all.len(), 4);
        assert!(all[0].id.starts_with("work-"));
        assert!(all[1].id.starts_with("work-"));
        assert!(all[2].id.starts_with("lead-"));
        assert!(all[3].id.starts_with("lead-"));
    }

    #[test]
    fn test_events_carry_status_grouping() {
        let store = ContentStore::seeded();
        let upcoming = store
            .events()
            .iter()
            .filter(|e| e.status == EventStatus::Upcoming)
            .count();
        assert_eq!(upcoming, 2);
    }

    #[test]
    fn test_profile_identity_fields_non_empty() {
        let store = ContentStore::seeded();
        assert!(!store.profile().name.is_empty());
        assert!(!store.profile().title.is_empty());
        assert!(store.contact_email().contains('@'));
    }
}
