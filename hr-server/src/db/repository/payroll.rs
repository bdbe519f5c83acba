//! Payroll Repository

use super::{RepoError, RepoResult};
use shared::models::{
    PaymentMethod, Payroll, PayrollDepartmentStats, PayrollDetail, PayrollMonthlyStats,
    PayrollStatus, PayrollTrend, PayrollYearlyStats,
};
use shared::util::now_millis;
use sqlx::SqlitePool;

const PAYROLL_SELECT: &str = "SELECT id, employee_id, month, year, basic_salary, allowances, deductions, net_salary, status, processed_by, processed_date, payment_method, remarks, created_at, updated_at FROM payroll";

const DETAIL_SELECT: &str = "SELECT p.id, p.employee_id, p.month, p.year, p.basic_salary, p.allowances, p.deductions, \
     p.net_salary, p.status, p.processed_by, p.processed_date, p.payment_method, p.remarks, \
     p.created_at, p.updated_at, \
     e.first_name AS employee_first_name, e.last_name AS employee_last_name, \
     u.username AS processed_by_username \
     FROM payroll p \
     JOIN employee e ON e.id = p.employee_id \
     LEFT JOIN user u ON u.id = p.processed_by";

/// Computed payroll run ready to persist
#[derive(Debug, Clone)]
pub struct NewPayroll {
    pub employee_id: i64,
    pub month: i32,
    pub year: i32,
    pub basic_salary: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub net_salary: f64,
    pub payment_method: PaymentMethod,
    pub remarks: Option<String>,
    pub processed_by: i64,
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Payroll>> {
    let sql = format!("{PAYROLL_SELECT} WHERE id = ?");
    let payroll = sqlx::query_as::<_, Payroll>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(payroll)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM payroll")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Insert a processed run; a second run for the same period is a `Duplicate`
pub async fn create(pool: &SqlitePool, data: NewPayroll) -> RepoResult<Payroll> {
    let now = now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO payroll (employee_id, month, year, basic_salary, allowances, deductions, net_salary, \
         status, processed_by, processed_date, payment_method, remarks, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.employee_id)
    .bind(data.month)
    .bind(data.year)
    .bind(data.basic_salary)
    .bind(data.allowances)
    .bind(data.deductions)
    .bind(data.net_salary)
    .bind(PayrollStatus::Processed)
    .bind(data.processed_by)
    .bind(now)
    .bind(data.payment_method)
    .bind(&data.remarks)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create payroll".into()))
}

/// All runs, most recently processed first
pub async fn history(pool: &SqlitePool) -> RepoResult<Vec<PayrollDetail>> {
    let sql = format!("{DETAIL_SELECT} ORDER BY p.processed_date DESC, p.id DESC");
    let rows = sqlx::query_as::<_, PayrollDetail>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_employee(
    pool: &SqlitePool,
    employee_id: i64,
) -> RepoResult<Vec<PayrollDetail>> {
    let sql = format!(
        "{DETAIL_SELECT} WHERE p.employee_id = ? ORDER BY p.year DESC, p.month DESC, p.id DESC"
    );
    let rows = sqlx::query_as::<_, PayrollDetail>(&sql)
        .bind(employee_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Totals per period between `(from_year, from_month)` and `(to_year, to_month)` inclusive
///
/// Periods without runs are absent; callers zero-fill.
pub async fn trends(
    pool: &SqlitePool,
    from: (i32, u32),
    to: (i32, u32),
) -> RepoResult<Vec<PayrollTrend>> {
    let rows = sqlx::query_as::<_, PayrollTrend>(
        "SELECT month, year, SUM(net_salary) AS total_net_salary, COUNT(*) AS employee_count \
         FROM payroll WHERE (year * 100 + month) BETWEEN ? AND ? \
         GROUP BY year, month ORDER BY year, month",
    )
    .bind(from.0 * 100 + from.1 as i32)
    .bind(to.0 * 100 + to.1 as i32)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Per-period totals, newest first, optionally limited to one year
pub async fn monthly_stats(
    pool: &SqlitePool,
    year: Option<i32>,
) -> RepoResult<Vec<PayrollMonthlyStats>> {
    let rows = sqlx::query_as::<_, PayrollMonthlyStats>(
        "SELECT year, month, SUM(basic_salary) AS total_basic, SUM(allowances) AS total_allowances, \
         SUM(deductions) AS total_deductions, SUM(net_salary) AS total_net, COUNT(*) AS employee_count \
         FROM payroll WHERE (?1 IS NULL OR year = ?1) \
         GROUP BY year, month ORDER BY year DESC, month DESC",
    )
    .bind(year)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn department_stats(pool: &SqlitePool) -> RepoResult<Vec<PayrollDepartmentStats>> {
    let rows = sqlx::query_as::<_, PayrollDepartmentStats>(
        "SELECT e.department AS department, AVG(p.net_salary) AS average_net_salary, \
         SUM(p.net_salary) AS total_net_salary, COUNT(*) AS payroll_count \
         FROM payroll p JOIN employee e ON e.id = p.employee_id \
         GROUP BY e.department ORDER BY e.department",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn yearly_comparison(pool: &SqlitePool) -> RepoResult<Vec<PayrollYearlyStats>> {
    let rows = sqlx::query_as::<_, PayrollYearlyStats>(
        "SELECT year, SUM(net_salary) AS total_net_salary, AVG(net_salary) AS average_net_salary, \
         COUNT(*) AS payroll_count \
         FROM payroll GROUP BY year ORDER BY year",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
