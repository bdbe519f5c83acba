//! Grouping of codes by their thousands range

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Auth,
    Permission,
    Leave,
    Payroll,
    Employee,
    /// 9xxx, and any range without a domain of its own
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code / 1000 {
            0 => Self::General,
            1 => Self::Auth,
            2 => Self::Permission,
            4 => Self::Leave,
            5 => Self::Payroll,
            8 => Self::Employee,
            _ => Self::System,
        }
    }

    /// Failures the client cannot fix; their details stay in the server log
    pub fn is_system(self) -> bool {
        self == Self::System
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
