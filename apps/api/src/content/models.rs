use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The structured record describing the portfolio owner.
/// Immutable except through the profile-sync apply action, which replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub about: String,
    pub avatar_url: String,
    pub logo_url: String,
}

/// A profile augmented at runtime by the sync trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncedProfile {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_synced: Option<DateTime<Utc>>,
}

impl From<Profile> for SyncedProfile {
    fn from(profile: Profile) -> Self {
        SyncedProfile {
            profile,
            company: None,
            source_url: None,
            last_synced: None,
        }
    }
}

/// A headline metric attached to an experience entry ("-35%", "8,000+", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

/// One work or leadership experience entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub description: String,
    pub skills: Vec<String>,
    pub metrics: Vec<Metric>,
    pub logo: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub long_description: String,
    pub technologies: Vec<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Past,
}

/// A convention/career-fair stat badge ("Connections: 50+").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventStat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub id: String,
    pub title: String,
    pub location: String,
    pub date: String,
    pub description: String,
    pub status: EventStatus,
    pub link: String,
    pub logo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub key_takeaways: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub objectives: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub stats: Vec<EventStat>,
}

/// One named group of the resume skill matrix ("Programming" → comma list).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub group: String,
    pub items: String,
}
