//! Payroll Model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum PaymentMethod {
    #[default]
    BankTransfer,
    Check,
    Cash,
}

/// Payroll run state. Runs are created as `Processed`; nothing moves them
/// to `Paid` yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum PayrollStatus {
    Pending,
    Processed,
    Paid,
}

/// One payroll run for one employee and (month, year)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payroll {
    pub id: i64,
    pub employee_id: i64,
    pub month: i32,
    pub year: i32,
    pub basic_salary: f64,
    pub allowances: f64,
    pub deductions: f64,
    /// basic + allowances - deductions
    pub net_salary: f64,
    pub status: PayrollStatus,
    pub processed_by: i64,
    pub processed_date: i64,
    pub payment_method: PaymentMethod,
    pub remarks: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Payroll run joined with employee name and processor username
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PayrollDetail {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub payroll: Payroll,
    pub employee_first_name: String,
    pub employee_last_name: String,
    pub processed_by_username: Option<String>,
}

/// Calculate payroll payload
///
/// The basic salary always comes from the employee record; a `basicSalary`
/// field in the body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollCalculate {
    pub employee_id: i64,
    pub month: i32,
    pub year: i32,
    pub allowances: Option<f64>,
    pub deductions: Option<f64>,
    pub payment_method: Option<PaymentMethod>,
    pub remarks: Option<String>,
}

/// Net salary paid in one month of the trailing window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PayrollTrend {
    pub month: i32,
    pub year: i32,
    pub total_net_salary: f64,
    pub employee_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PayrollMonthlyStats {
    pub year: i32,
    pub month: i32,
    pub total_basic: f64,
    pub total_allowances: f64,
    pub total_deductions: f64,
    pub total_net: f64,
    pub employee_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PayrollDepartmentStats {
    pub department: String,
    pub average_net_salary: f64,
    pub total_net_salary: f64,
    pub payroll_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PayrollYearlyStats {
    pub year: i32,
    pub total_net_salary: f64,
    pub average_net_salary: f64,
    pub payroll_count: i64,
}
