//! Error codes and the JSON error envelope
//!
//! Handlers return [`AppResult`]; an [`AppError`] renders as
//!
//! ```json
//! { "code": 4003, "message": "Leave request has already been resolved" }
//! ```
//!
//! with the HTTP status taken from its [`ErrorCode`].
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::validation("End date must not be before start date")
//!     .with_detail("field", "endDate");
//! let body = ApiResponse::from(&err);
//! assert_eq!(body.code, 2);
//! assert_eq!(err.http_status().as_u16(), 400);
//! assert_eq!(AppError::new(ErrorCode::EmployeeNotFound).http_status().as_u16(), 404);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult, Details};
