//! `AppError` and the error envelope

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::codes::ErrorCode;

pub type Details = Map<String, Value>;

/// Error returned by handlers and services
///
/// Rendered as an [`ApiResponse`] with the status from
/// [`ErrorCode::http_status`]. System errors are logged and reach the client
/// with the code's generic message only.
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    /// Context for the client (offending field, id, ...)
    pub details: Option<Details>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Error carrying the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    pub fn is_system(&self) -> bool {
        self.code.category().is_system()
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, message)
    }

    /// `"<resource> not found"` with the resource name in the details
    pub fn not_found(resource: &str) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{resource} not found"))
            .with_detail("resource", resource)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::AlreadyExists, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TokenInvalid, message)
    }

    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PermissionDenied, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, message)
    }
}

/// Error body: `{ "code": 4003, "message": "...", "details": {...} }`
///
/// Successful handlers return their resource JSON directly; only failures
/// use this envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
}

impl From<&AppError> for ApiResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = if self.is_system() {
            tracing::error!(code = %self.code, message = %self.message, details = ?self.details, "System error");
            ApiResponse::from(&AppError::new(self.code))
        } else {
            ApiResponse::from(&self)
        };
        (self.http_status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_default_and_custom_messages() {
        let err = AppError::new(ErrorCode::EmployeeNotFound);
        assert_eq!(err.message, "Employee not found");
        assert!(err.details.is_none());

        let err = AppError::not_found("Leave request");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Leave request not found");
        assert_eq!(err.details.unwrap()["resource"], "Leave request");

        assert_eq!(
            AppError::new(ErrorCode::LeaveAlreadyResolved).to_string(),
            "E4003: Leave request has already been resolved"
        );
    }

    #[test]
    fn test_details_accumulate() {
        let err = AppError::validation("bad period")
            .with_detail("month", 13)
            .with_detail("year", 2024);
        let details = err.details.unwrap();
        assert_eq!(details["month"], 13);
        assert_eq!(details["year"], 2024);
    }

    #[test]
    fn test_envelope_shape() {
        let body = ApiResponse::from(&AppError::new(ErrorCode::ValidationFailed));
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"code":2,"message":"Validation failed"}"#
        );

        let body = ApiResponse::from(&AppError::new(ErrorCode::LeaveNotFound).with_detail("id", 7));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"code": 4001, "message": "Leave request not found", "details": {"id": 7}})
        );
    }

    #[tokio::test]
    async fn test_system_error_message_is_hidden() {
        let resp = AppError::database("disk I/O error at /var/lib/hr.db").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: ApiResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, 9002);
        assert_eq!(body.message, "Database error");
    }

    #[test]
    fn test_workflow_error_status() {
        let resp = AppError::new(ErrorCode::PayrollAlreadyProcessed).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
