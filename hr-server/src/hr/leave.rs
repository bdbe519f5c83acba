//! Leave day counts and yearly balance

use chrono::NaiveDate;
use shared::models::{LeaveBalance, LeaveType};

/// Days allowed per calendar year; unpaid leave has no allowance
pub const LEAVE_POLICY: LeaveBalance = LeaveBalance {
    annual: 20,
    sick: 10,
    casual: 5,
};

/// Inclusive day count, `None` when `end` precedes `start`
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> Option<i64> {
    if end < start {
        return None;
    }
    Some((end - start).num_days() + 1)
}

/// `[Jan 1 of year, Jan 1 of year + 1)`
pub fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let from = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let to = NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?;
    Some((from, to))
}

/// Policy minus approved usage; may go negative when usage exceeds the policy
pub fn remaining_balance(used: &[(LeaveType, i64)]) -> LeaveBalance {
    let mut balance = LEAVE_POLICY;
    for (leave_type, days) in used {
        match leave_type {
            LeaveType::Annual => balance.annual -= days,
            LeaveType::Sick => balance.sick -= days,
            LeaveType::Casual => balance.casual -= days,
            LeaveType::Unpaid => {}
        }
    }
    balance
}
