//! Paddock reference data — driver/constructor standings, news, and the race
//! calendar backing the F1 section, the chat responder's `get_f1_standings`
//! tool, and the fallback's standings reply.
//!
//! Served through the `StandingsFeed` seam so a live timing provider can be
//! swapped in without touching handlers or the responder.

use async_trait::async_trait;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverStanding {
    pub position: String,
    pub name: String,
    pub team: String,
    pub points: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorStanding {
    pub position: String,
    pub team: String,
    pub points: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standings {
    pub drivers: Vec<DriverStanding>,
    pub constructors: Vec<ConstructorStanding>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    pub time: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceEvent {
    pub round: String,
    pub name: String,
    pub date: String,
    pub circuit: String,
    pub country: String,
}

/// Source of standings-like reference data.
/// Carried in `AppState` as `Arc<dyn StandingsFeed>`.
#[async_trait]
pub trait StandingsFeed: Send + Sync {
    async fn standings(&self) -> Result<Standings, AppError>;
    async fn news(&self) -> Result<Vec<NewsItem>, AppError>;
    async fn calendar(&self) -> Result<Vec<RaceEvent>, AppError>;
}

/// In-process feed returning a fixed snapshot. Default backend.
pub struct StaticStandingsFeed;

#[async_trait]
impl StandingsFeed for StaticStandingsFeed {
    async fn standings(&self) -> Result<Standings, AppError> {
        Ok(standings_snapshot())
    }

    async fn news(&self) -> Result<Vec<NewsItem>, AppError> {
        Ok(news_snapshot())
    }

    async fn calendar(&self) -> Result<Vec<RaceEvent>, AppError> {
        Ok(calendar_snapshot())
    }
}

/// The fixed standings snapshot. Also consumed directly by the local fallback
/// responder, which must stay infallible.
pub fn standings_snapshot() -> Standings {
    fn driver(position: &str, name: &str, team: &str, points: &str) -> DriverStanding {
        DriverStanding {
            position: position.to_string(),
            name: name.to_string(),
            team: team.to_string(),
            points: points.to_string(),
        }
    }
    fn constructor(position: &str, team: &str, points: &str) -> ConstructorStanding {
        ConstructorStanding {
            position: position.to_string(),
            team: team.to_string(),
            points: points.to_string(),
        }
    }

    Standings {
        drivers: vec![
            driver("1", "Max Verstappen", "Red Bull Racing", "25"),
            driver("2", "Lewis Hamilton", "Ferrari", "18"),
            driver("3", "Lando Norris", "McLaren", "15"),
            driver("4", "Charles Leclerc", "Ferrari", "12"),
            driver("5", "Oscar Piastri", "McLaren", "10"),
        ],
        constructors: vec![
            constructor("1", "Ferrari", "30"),
            constructor("2", "Red Bull Racing", "25"),
            constructor("3", "McLaren", "25"),
            constructor("4", "Mercedes", "12"),
            constructor("5", "Williams", "8"),
        ],
    }
}

fn news_snapshot() -> Vec<NewsItem> {
    fn item(title: &str, source: &str, time: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            source: source.to_string(),
            time: time.to_string(),
            url: "#".to_string(),
        }
    }

    vec![
        item(
            "Cadillac F1 Team announces new technical partnership for 2026",
            "Motorsport.com",
            "2h ago",
        ),
        item(
            "Verstappen praises RB21 chassis balance after simulator session",
            "F1.com",
            "5h ago",
        ),
        item(
            "FIA updates technical regulations regarding active aero",
            "Autosport",
            "8h ago",
        ),
    ]
}

fn calendar_snapshot() -> Vec<RaceEvent> {
    fn race(round: &str, name: &str, date: &str, circuit: &str, country: &str) -> RaceEvent {
        RaceEvent {
            round: round.to_string(),
            name: name.to_string(),
            date: date.to_string(),
            circuit: circuit.to_string(),
            country: country.to_string(),
        }
    }

    vec![
        race("1", "Australian Grand Prix", "Mar 16", "Albert Park", "Australia"),
        race(
            "2",
            "Chinese Grand Prix",
            "Mar 23",
            "Shanghai International Circuit",
            "China",
        ),
        race("3", "Japanese Grand Prix", "Apr 6", "Suzuka Circuit", "Japan"),
    ]
}

/// GET /api/v1/reference/standings
pub async fn handle_standings(State(state): State<AppState>) -> Result<Json<Standings>, AppError> {
    Ok(Json(state.feed.standings().await?))
}

/// GET /api/v1/reference/news
pub async fn handle_news(State(state): State<AppState>) -> Result<Json<Vec<NewsItem>>, AppError> {
    Ok(Json(state.feed.news().await?))
}

/// GET /api/v1/reference/calendar
pub async fn handle_calendar(
    State(state): State<AppState>,
) -> Result<Json<Vec<RaceEvent>>, AppError> {
    Ok(Json(state.feed.calendar().await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standings_snapshot_ordered_by_position() {
        let standings = standings_snapshot();
        assert_eq!(standings.drivers.len(), 5);
        assert_eq!(standings.drivers[0].name, "Max Verstappen");
        assert_eq!(standings.drivers[0].points, "25");
        assert_eq!(standings.constructors[0].team, "Ferrari");
    }

    #[tokio::test]
    async fn test_static_feed_never_fails() {
        let feed = StaticStandingsFeed;
        assert!(feed.standings().await.is_ok());
        assert!(feed.news().await.is_ok());
        assert!(feed.calendar().await.is_ok());
    }
}
