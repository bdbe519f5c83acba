//! Leave Request Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum LeaveType {
    Annual,
    Sick,
    Casual,
    Unpaid,
}

impl LeaveType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Sick => "sick",
            Self::Casual => "casual",
            Self::Unpaid => "unpaid",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annual" => Ok(Self::Annual),
            "sick" => Ok(Self::Sick),
            "casual" => Ok(Self::Casual),
            "unpaid" => Ok(Self::Unpaid),
            other => Err(format!("Invalid leave type: {other}")),
        }
    }
}

/// Workflow state; `Approved` and `Rejected` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(format!("Invalid leave status: {other}")),
        }
    }
}

/// Leave request entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct LeaveRequest {
    pub id: i64,
    pub employee_id: i64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Inclusive day count, fixed at application time
    pub days: i64,
    pub reason: String,
    pub status: LeaveStatus,
    /// User who approved or rejected the request
    pub approved_by: Option<i64>,
    pub approval_date: Option<i64>,
    pub approval_comments: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Leave request joined with employee and approver names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct LeaveRequestDetail {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub leave: LeaveRequest,
    pub employee_first_name: String,
    pub employee_last_name: String,
    pub employee_department: String,
    pub approver_username: Option<String>,
}

/// Apply for leave payload
///
/// `leave_type` stays a string so an unknown value is reported as a
/// validation failure rather than a body rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApply {
    pub employee_id: i64,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

/// Approve / reject payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveStatusUpdate {
    pub status: String,
    pub comments: Option<String>,
}

/// Remaining days per leave type for one calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub annual: i64,
    pub sick: i64,
    pub casual: i64,
}

/// Approved leave days summed per employee
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct LeaveTaker {
    /// Employee id
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub total_days: i64,
}

/// Approved leave rendered for a calendar view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: i64,
    /// "First Last - type"
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_type_parse() {
        assert_eq!("sick".parse::<LeaveType>(), Ok(LeaveType::Sick));
        assert_eq!(LeaveType::Unpaid.to_string(), "unpaid");
        assert!("vacation".parse::<LeaveType>().is_err());
    }

    #[test]
    fn test_leave_status_terminal() {
        assert!(!LeaveStatus::Pending.is_terminal());
        assert!(LeaveStatus::Approved.is_terminal());
        assert!(LeaveStatus::Rejected.is_terminal());
        assert_eq!("approved".parse::<LeaveStatus>(), Ok(LeaveStatus::Approved));
    }

    #[test]
    fn test_calendar_event_wire_shape() {
        let event = CalendarEvent {
            id: 3,
            title: "Ada Lovelace - annual".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            leave_type: LeaveType::Annual,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "annual");
        assert_eq!(json["start"], "2024-01-01");
        assert_eq!(json["end"], "2024-01-05");
    }
}
