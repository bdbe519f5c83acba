//! Status code for each error code

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Validation and workflow violations (including duplicate employee
    /// emails and payroll runs) fall through to 400.
    pub fn http_status(&self) -> StatusCode {
        use ErrorCode::*;

        match self {
            Success => StatusCode::OK,
            NotFound | UserNotFound | EmployeeNotFound | LeaveNotFound | PayrollNotFound => {
                StatusCode::NOT_FOUND
            }
            AlreadyExists | UsernameExists | UserEmailExists => StatusCode::CONFLICT,
            NotAuthenticated | InvalidCredentials | TokenExpired | TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }
            PermissionDenied => StatusCode::FORBIDDEN,
            NetworkError | TimeoutError => StatusCode::SERVICE_UNAVAILABLE,
            Unknown | InternalError | DatabaseError | ConfigError | EmailSendFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
