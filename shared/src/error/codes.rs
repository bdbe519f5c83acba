//! Numeric error codes
//!
//! One table drives the enum, the default messages and the `u16`
//! conversion, so a code cannot be added without its message.
//!
//! | Range | Domain |
//! |-------|--------|
//! | 0xxx | general |
//! | 1xxx | authentication |
//! | 2xxx | permission |
//! | 4xxx | leave |
//! | 5xxx | payroll |
//! | 8xxx | employee |
//! | 9xxx | system |

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! error_codes {
    ($( $(#[$attr:meta])* $variant:ident = $value:literal => $message:literal ),* $(,)?) => {
        /// Error code, sent as a bare number on the wire
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "u16", try_from = "u16")]
        #[repr(u16)]
        pub enum ErrorCode {
            $( $(#[$attr])* $variant = $value, )*
        }

        impl ErrorCode {
            /// Every defined code, in table order
            pub const ALL: &'static [ErrorCode] = &[ $( ErrorCode::$variant ),* ];

            /// Default client-facing message
            pub const fn message(&self) -> &'static str {
                match self {
                    $( ErrorCode::$variant => $message, )*
                }
            }
        }

        impl TryFrom<u16> for ErrorCode {
            type Error = InvalidErrorCode;

            fn try_from(value: u16) -> Result<Self, Self::Error> {
                match value {
                    $( $value => Ok(ErrorCode::$variant), )*
                    other => Err(InvalidErrorCode(other)),
                }
            }
        }
    };
}

error_codes! {
    Success = 0 => "Operation completed successfully",
    Unknown = 1 => "An unknown error occurred",
    ValidationFailed = 2 => "Validation failed",
    NotFound = 3 => "Resource not found",
    AlreadyExists = 4 => "Resource already exists",
    InvalidRequest = 5 => "Invalid request",
    InvalidFormat = 6 => "Invalid format",
    RequiredField = 7 => "Required field is missing",
    ValueOutOfRange = 8 => "Value is out of range",

    /// Missing bearer token
    NotAuthenticated = 1001 => "No token, authorization denied",
    InvalidCredentials = 1002 => "Invalid credentials",
    TokenExpired = 1003 => "Authentication token has expired",
    TokenInvalid = 1004 => "Token is not valid",
    PasswordTooShort = 1005 => "Password must be at least 8 characters",
    UsernameExists = 1006 => "Username already exists",
    UserEmailExists = 1007 => "Email already registered",
    UserNotFound = 1008 => "User not found",

    PermissionDenied = 2001 => "Permission denied",

    LeaveNotFound = 4001 => "Leave request not found",
    /// End date precedes start date
    LeaveInvalidRange = 4002 => "End date must not be before start date",
    /// Request was already approved or rejected
    LeaveAlreadyResolved = 4003 => "Leave request has already been resolved",
    LeaveInvalidStatus = 4004 => "Status must be approved or rejected",
    LeaveInvalidType = 4005 => "Invalid leave type",

    PayrollNotFound = 5001 => "Payroll record not found",
    /// A run already exists for the employee and (month, year)
    PayrollAlreadyProcessed = 5002 => "Payroll already processed for this employee and period",
    PayrollInvalidPeriod = 5003 => "Invalid payroll month or year",
    PayrollInvalidAmount = 5004 => "Payroll amounts must be non-negative",

    EmployeeNotFound = 8001 => "Employee not found",
    EmployeeEmailExists = 8002 => "Employee email already exists",
    EmployeeInvalidSalary = 8003 => "Salary must be a non-negative number",

    InternalError = 9001 => "Internal server error",
    DatabaseError = 9002 => "Database error",
    NetworkError = 9003 => "Network error",
    TimeoutError = 9004 => "Operation timed out",
    ConfigError = 9005 => "Configuration error",
    /// Contact relay could not deliver the message
    EmailSendFailed = 9101 => "Failed to send message. Please try again later.",
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number that is not in the code table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

/// `E` followed by the zero-padded code, e.g. `E4003`
impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
