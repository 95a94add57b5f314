use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use super::{ContactForm, SubmissionStatus, SUCCESS_DISPLAY};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: Uuid,
    pub status: SubmissionStatus,
    /// Present on success: how long to display the success state before
    /// resetting the form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_after_ms: Option<u64>,
    /// Present on relay failure: the direct-contact alternative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_email: Option<String>,
}

/// POST /api/v1/contact
///
/// Validation errors return 400 without touching the relay. A relay failure
/// is a degraded-but-successful response carrying the fallback address, so
/// the client can offer manual retry.
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactResponse>, AppError> {
    let status = super::submit(state.relay.as_ref(), &form).await?;

    let response = match status {
        SubmissionStatus::Success => ContactResponse {
            id: Uuid::new_v4(),
            status,
            reset_after_ms: Some(SUCCESS_DISPLAY.as_millis() as u64),
            fallback_email: None,
        },
        _ => ContactResponse {
            id: Uuid::new_v4(),
            status,
            reset_after_ms: None,
            fallback_email: Some(state.content.contact_email().to_string()),
        },
    };

    Ok(Json(response))
}
