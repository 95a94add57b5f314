//! Contact Form Bridge — validates the three required fields and forwards
//! them as one JSON POST to the hosted form relay (formsubmit.co-style).
//!
//! The submission lifecycle is an explicit state machine rather than ad-hoc
//! flags: Idle → Submitting → Success | Error, with Error → Submitting on
//! retry and Success → Idle after the fixed display window. Validation
//! failures never reach the relay.

pub mod handlers;

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::errors::AppError;

/// How long the client should hold the success state before resetting the
/// form. Surfaced to callers as `resetAfterMs`.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// All three fields are required, whitespace-only counts as empty.
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("relay returned status {status}")]
    Status { status: u16 },
}

/// Submission lifecycle state. Transitions outside the methods below are
/// illegal; notably, a second submission cannot begin while one is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Idle → Submitting, and Error → Submitting for manual retry.
    pub fn begin(self) -> Result<SubmissionStatus, AppError> {
        match self {
            SubmissionStatus::Idle | SubmissionStatus::Error => Ok(SubmissionStatus::Submitting),
            _ => Err(AppError::Validation(
                "a submission is already in flight".to_string(),
            )),
        }
    }

    /// Submitting → Success or Error once the relay call resolves.
    pub fn settle(self, delivered: bool) -> SubmissionStatus {
        match self {
            SubmissionStatus::Submitting if delivered => SubmissionStatus::Success,
            SubmissionStatus::Submitting => SubmissionStatus::Error,
            other => other,
        }
    }

    /// Success → Idle after the display window. Error stays put: it clears
    /// only through a retry (`begin`).
    pub fn reset(self) -> SubmissionStatus {
        match self {
            SubmissionStatus::Success => SubmissionStatus::Idle,
            other => other,
        }
    }
}

/// Delivery seam for the hosted relay.
/// Carried in `AppState` as `Arc<dyn FormRelay>`.
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn deliver(&self, form: &ContactForm) -> Result<(), RelayError>;
}

/// The relay wire payload. `_subject` and `_template` are relay control
/// fields, not form data.
#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    #[serde(rename = "_subject")]
    subject: String,
    #[serde(rename = "_template")]
    template: &'static str,
}

/// `reqwest`-backed relay posting to the configured endpoint. Success is
/// inferred from HTTP status alone; the response body is not inspected.
pub struct HttpFormRelay {
    client: Client,
    endpoint: String,
}

impl HttpFormRelay {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }
}

#[async_trait]
impl FormRelay for HttpFormRelay {
    async fn deliver(&self, form: &ContactForm) -> Result<(), RelayError> {
        let payload = RelayPayload {
            name: &form.name,
            email: &form.email,
            message: &form.message,
            subject: format!(
                "Portfolio Contact: {} [{}]",
                form.name,
                Utc::now().format("%H:%M:%S")
            ),
            template: "table",
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("accept", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Status {
                status: status.as_u16(),
            })
        }
    }
}

/// Validate, then deliver, driving the state machine. Returns the settled
/// status; relay failures are logged and settle to `Error` rather than
/// propagating, so the handler can surface the direct-contact alternative.
pub async fn submit(relay: &dyn FormRelay, form: &ContactForm) -> Result<SubmissionStatus, AppError> {
    form.validate()?;

    let status = SubmissionStatus::Idle.begin()?;
    let status = match relay.deliver(form).await {
        Ok(()) => status.settle(true),
        Err(e) => {
            warn!("form relay delivery failed: {e}");
            status.settle(false)
        }
    };

    Ok(status)
}
