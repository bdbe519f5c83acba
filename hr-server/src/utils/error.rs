//! Error types
//!
//! The service uses the unified error types from `shared::error`;
//! handlers return [`AppResult`] and errors render as the
//! `{ code, message, details? }` envelope.

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
