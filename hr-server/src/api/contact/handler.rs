//! Contact form handler

use axum::{Json, extract::State, http::StatusCode};

use crate::api::AppJson;
use crate::core::ServerState;
use crate::utils::validation::{
    MAX_MESSAGE_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, validate_email, validate_min_len,
    validate_required_text,
};
use crate::utils::{AppError, ErrorCode};
use shared::models::{ContactRequest, ContactResponse};

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

/// POST /api/contact - relay a message to the configured inbox
///
/// Failures use the contact response shape `{success: false, message}`
/// rather than the error envelope.
pub async fn send(
    State(state): State<ServerState>,
    AppJson(req): AppJson<ContactRequest>,
) -> (StatusCode, Json<ContactResponse>) {
    if let Err(err) = validate(&req) {
        return (
            err.http_status(),
            Json(ContactResponse {
                success: false,
                message: err.message,
            }),
        );
    }

    match state.email.send_contact(&req).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ContactResponse {
                success: true,
                message: "Message sent successfully!".to_string(),
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Contact relay failed");
            let code = ErrorCode::EmailSendFailed;
            (
                code.http_status(),
                Json(ContactResponse {
                    success: false,
                    message: code.message().to_string(),
                }),
            )
        }
    }
}

fn validate(req: &ContactRequest) -> Result<(), AppError> {
    validate_min_len(&req.name, "name", MIN_NAME_CHARS)?;
    validate_required_text(&req.name, "name", MAX_NAME_LEN)?;
    validate_email(&req.email, "email")?;
    validate_required_text(&req.subject, "subject", MAX_NOTE_LEN)?;
    validate_min_len(&req.message, "message", MIN_MESSAGE_CHARS)?;
    validate_required_text(&req.message, "message", MAX_MESSAGE_LEN)?;
    Ok(())
}
