//! Net salary calculation

use rust_decimal::prelude::*;
use shared::error::{AppError, ErrorCode};
use shared::models::PayrollTrend;

pub const MIN_PAYROLL_YEAR: i32 = 2000;

/// `basic + allowances - deductions`, rounded to cents
///
/// Computed in decimal so sums of cents do not drift.
pub fn net_salary(basic: f64, allowances: f64, deductions: f64) -> Result<f64, AppError> {
    let to_decimal = |value: f64, field: &str| {
        Decimal::from_f64(value).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::PayrollInvalidAmount,
                format!("{field} is not a valid amount"),
            )
        })
    };
    let basic = to_decimal(basic, "basicSalary")?;
    let allowances = to_decimal(allowances, "allowances")?;
    let deductions = to_decimal(deductions, "deductions")?;
    let net = basic
        .checked_add(allowances)
        .and_then(|gross| gross.checked_sub(deductions))
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::PayrollInvalidAmount, "Net salary is out of range")
        })?;
    net.round_dp(2)
        .to_f64()
        .ok_or_else(|| AppError::new(ErrorCode::PayrollInvalidAmount))
}

/// Month 1-12 and year >= 2000
pub fn validate_period(month: i32, year: i32) -> Result<(), AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::with_message(
            ErrorCode::PayrollInvalidPeriod,
            "Month must be between 1 and 12",
        )
        .with_detail("month", month));
    }
    if year < MIN_PAYROLL_YEAR {
        return Err(AppError::with_message(
            ErrorCode::PayrollInvalidPeriod,
            format!("Year must be {MIN_PAYROLL_YEAR} or later"),
        )
        .with_detail("year", year));
    }
    Ok(())
}

/// One entry per `(year, month)` of `window`, zero where no run exists
pub fn fill_trends(window: &[(i32, u32)], rows: &[PayrollTrend]) -> Vec<PayrollTrend> {
    window
        .iter()
        .map(|&(year, month)| {
            let month = month as i32;
            rows.iter()
                .find(|r| r.year == year && r.month == month)
                .cloned()
                .unwrap_or(PayrollTrend {
                    month,
                    year,
                    total_net_salary: 0.0,
                    employee_count: 0,
                })
        })
        .collect()
}
