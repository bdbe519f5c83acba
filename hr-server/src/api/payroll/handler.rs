//! Payroll API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::api::{AppJson, AppQuery};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{RepoError, employee, payroll};
use crate::hr;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{
    Payroll, PayrollCalculate, PayrollDepartmentStats, PayrollDetail, PayrollMonthlyStats,
    PayrollTrend, PayrollYearlyStats,
};
use shared::util::{today, trailing_months};

const TREND_MONTHS: u32 = 6;

#[derive(Debug, Deserialize)]
pub struct MonthlyQuery {
    pub year: Option<i32>,
}

/// POST /api/payroll/calculate - compute and store one run
///
/// Basic salary is read from the employee record.
pub async fn calculate(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    AppJson(payload): AppJson<PayrollCalculate>,
) -> AppResult<(StatusCode, Json<Payroll>)> {
    hr::validate_period(payload.month, payload.year)?;
    let allowances = payload.allowances.unwrap_or(0.0);
    let deductions = payload.deductions.unwrap_or(0.0);
    validate_amount(allowances, "allowances")?;
    validate_amount(deductions, "deductions")?;
    validate_optional_text(&payload.remarks, "remarks", MAX_NOTE_LEN)?;

    let pool = state.pool();
    let emp = employee::find_by_id(pool, payload.employee_id)
        .await?
        .ok_or_else(|| {
            AppError::new(ErrorCode::EmployeeNotFound).with_detail("id", payload.employee_id)
        })?;

    let net_salary = hr::net_salary(emp.salary, allowances, deductions)?;

    let created = payroll::create(
        pool,
        payroll::NewPayroll {
            employee_id: emp.id,
            month: payload.month,
            year: payload.year,
            basic_salary: emp.salary,
            allowances,
            deductions,
            net_salary,
            payment_method: payload.payment_method.unwrap_or_default(),
            remarks: payload.remarks.map(|r| r.trim().to_string()),
            processed_by: current.id,
        },
    )
    .await
    .map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::new(ErrorCode::PayrollAlreadyProcessed)
            .with_detail("employeeId", payload.employee_id)
            .with_detail("month", payload.month)
            .with_detail("year", payload.year),
        other => other.into(),
    })?;

    tracing::info!(
        payroll_id = created.id,
        employee_id = created.employee_id,
        month = created.month,
        year = created.year,
        net_salary = created.net_salary,
        "Payroll processed"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/payroll/history - all runs, most recent first
pub async fn history(State(state): State<ServerState>) -> AppResult<Json<Vec<PayrollDetail>>> {
    let rows = payroll::history(state.pool()).await?;
    Ok(Json(rows))
}

/// GET /api/payroll/employee/{employee_id}
pub async fn for_employee(
    State(state): State<ServerState>,
    Path(employee_id): Path<i64>,
) -> AppResult<Json<Vec<PayrollDetail>>> {
    let rows = payroll::find_by_employee(state.pool(), employee_id).await?;
    Ok(Json(rows))
}

/// GET /api/payroll/trends - last six months including the current one, oldest first
pub async fn trends(State(state): State<ServerState>) -> AppResult<Json<Vec<PayrollTrend>>> {
    let window = trailing_months(today(), TREND_MONTHS);
    let (Some(&from), Some(&to)) = (window.first(), window.last()) else {
        return Ok(Json(Vec::new()));
    };
    let rows = payroll::trends(state.pool(), from, to).await?;
    Ok(Json(hr::fill_trends(&window, &rows)))
}

/// GET /api/payroll/stats/monthly?year=
pub async fn monthly_stats(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<MonthlyQuery>,
) -> AppResult<Json<Vec<PayrollMonthlyStats>>> {
    let rows = payroll::monthly_stats(state.pool(), query.year).await?;
    Ok(Json(rows))
}

/// GET /api/payroll/stats/department
pub async fn department_stats(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<PayrollDepartmentStats>>> {
    let rows = payroll::department_stats(state.pool()).await?;
    Ok(Json(rows))
}

/// GET /api/payroll/stats/yearly
pub async fn yearly_comparison(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<PayrollYearlyStats>>> {
    let rows = payroll::yearly_comparison(state.pool()).await?;
    Ok(Json(rows))
}

fn validate_amount(value: f64, field: &str) -> Result<(), AppError> {
    crate::utils::validation::validate_amount(value, field).map_err(|e| {
        AppError::with_message(ErrorCode::PayrollInvalidAmount, e.message).with_detail("field", field)
    })
}
