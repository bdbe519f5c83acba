//! Employee Repository

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{
    DepartmentCount, DepartmentHeadcount, Employee, EmployeeCreate, EmployeeLeaveCount,
    EmployeeUpdate, SalarySummary,
};
use shared::util::now_millis;
use sqlx::SqlitePool;

const EMPLOYEE_SELECT: &str = "SELECT id, first_name, last_name, email, phone, department, position, salary, joining_date, created_at, updated_at FROM employee";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} ORDER BY id");
    let employees = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE id = ?");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn create(
    pool: &SqlitePool,
    data: EmployeeCreate,
    default_joining_date: NaiveDate,
) -> RepoResult<Employee> {
    let now = now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO employee (first_name, last_name, email, phone, department, position, salary, joining_date, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.first_name.trim())
    .bind(data.last_name.trim())
    .bind(data.email.trim())
    .bind(data.phone.as_deref().map(str::trim).filter(|p| !p.is_empty()))
    .bind(data.department.trim())
    .bind(data.position.trim())
    .bind(data.salary)
    .bind(data.joining_date.unwrap_or(default_joining_date))
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

/// Partial update; `None` fields keep their stored value, an empty `phone`
/// clears it
pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let rows = sqlx::query(
        "UPDATE employee SET \
         first_name = COALESCE(?1, first_name), \
         last_name = COALESCE(?2, last_name), \
         email = COALESCE(?3, email), \
         phone = CASE WHEN ?4 IS NULL THEN phone ELSE NULLIF(?4, '') END, \
         department = COALESCE(?5, department), \
         position = COALESCE(?6, position), \
         salary = COALESCE(?7, salary), \
         joining_date = COALESCE(?8, joining_date), \
         updated_at = ?9 \
         WHERE id = ?10",
    )
    .bind(data.first_name.as_deref().map(str::trim))
    .bind(data.last_name.as_deref().map(str::trim))
    .bind(data.email.as_deref().map(str::trim))
    .bind(data.phone.as_deref().map(str::trim))
    .bind(data.department.as_deref().map(str::trim))
    .bind(data.position.as_deref().map(str::trim))
    .bind(data.salary)
    .bind(data.joining_date)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

/// Hard delete; leave requests and payroll runs cascade
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    Ok(())
}

// ── Reports ─────────────────────────────────────────────────────────

pub async fn department_headcount(pool: &SqlitePool) -> RepoResult<Vec<DepartmentHeadcount>> {
    let rows = sqlx::query_as::<_, DepartmentHeadcount>(
        "SELECT department AS name, COUNT(*) AS value, COALESCE(SUM(salary), 0.0) AS total_salary \
         FROM employee GROUP BY department ORDER BY department",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn department_counts(pool: &SqlitePool) -> RepoResult<Vec<DepartmentCount>> {
    let rows = sqlx::query_as::<_, DepartmentCount>(
        "SELECT department, COUNT(*) AS count FROM employee GROUP BY department ORDER BY department",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn total_salary(pool: &SqlitePool) -> RepoResult<f64> {
    let total = sqlx::query_scalar("SELECT COALESCE(SUM(salary), 0.0) FROM employee")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

/// Most recent joiners first
pub async fn recent_joinees(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} ORDER BY joining_date DESC, id DESC LIMIT ?");
    let employees = sqlx::query_as::<_, Employee>(&sql)
        .bind(limit)
        .fetch_all(pool)
        .await?;
    Ok(employees)
}

/// Per employee, the number of leave requests starting in `[from, to)`
pub async fn leave_counts(
    pool: &SqlitePool,
    from: NaiveDate,
    to: NaiveDate,
) -> RepoResult<Vec<EmployeeLeaveCount>> {
    let rows = sqlx::query_as::<_, EmployeeLeaveCount>(
        "SELECT e.id, e.first_name || ' ' || e.last_name AS name, COUNT(l.id) AS total_leaves \
         FROM employee e \
         LEFT JOIN leave_request l ON l.employee_id = e.id AND l.start_date >= ? AND l.start_date < ? \
         GROUP BY e.id ORDER BY e.id",
    )
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Salary aggregates; `None` when there are no employees
pub async fn salary_summary(pool: &SqlitePool) -> RepoResult<Option<SalarySummary>> {
    let (average, highest, lowest, total) =
        sqlx::query_as::<_, (Option<f64>, Option<f64>, Option<f64>, Option<f64>)>(
            "SELECT AVG(salary), MAX(salary), MIN(salary), SUM(salary) FROM employee",
        )
        .fetch_one(pool)
        .await?;
    Ok(match (average, highest, lowest, total) {
        (Some(average_salary), Some(highest_salary), Some(lowest_salary), Some(total_salary)) => {
            Some(SalarySummary {
                average_salary,
                highest_salary,
                lowest_salary,
                total_salary,
            })
        }
        _ => None,
    })
}

pub async fn all_salaries(pool: &SqlitePool) -> RepoResult<Vec<f64>> {
    let salaries = sqlx::query_scalar("SELECT salary FROM employee")
        .fetch_all(pool)
        .await?;
    Ok(salaries)
}
