//! Leave API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::{AppJson, AppQuery};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{employee, leave};
use crate::hr;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{
    CalendarEvent, LeaveApply, LeaveBalance, LeaveRequest, LeaveRequestDetail, LeaveStatus,
    LeaveStatusUpdate, LeaveTaker, LeaveType,
};
use shared::util::current_year;

const TOP_TAKERS_LIMIT: i64 = 5;

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: Option<i32>,
}

/// Dates stay strings so a bad value is reported as a 400 with our message
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// POST /api/leaves/apply - submit a pending request
pub async fn apply(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<LeaveApply>,
) -> AppResult<(StatusCode, Json<LeaveRequest>)> {
    let leave_type: LeaveType = payload
        .leave_type
        .parse()
        .map_err(|msg: String| AppError::with_message(ErrorCode::LeaveInvalidType, msg))?;
    validate_required_text(&payload.reason, "reason", MAX_NOTE_LEN)?;
    let days = hr::inclusive_days(payload.start_date, payload.end_date).ok_or_else(|| {
        AppError::new(ErrorCode::LeaveInvalidRange)
            .with_detail("startDate", payload.start_date.to_string())
            .with_detail("endDate", payload.end_date.to_string())
    })?;

    let pool = state.pool();
    if employee::find_by_id(pool, payload.employee_id).await?.is_none() {
        return Err(
            AppError::new(ErrorCode::EmployeeNotFound).with_detail("id", payload.employee_id)
        );
    }

    let created = leave::create(
        pool,
        leave::NewLeave {
            employee_id: payload.employee_id,
            leave_type,
            start_date: payload.start_date,
            end_date: payload.end_date,
            days,
            reason: payload.reason.trim(),
        },
    )
    .await?;

    tracing::info!(
        leave_id = created.id,
        employee_id = created.employee_id,
        leave_type = %created.leave_type,
        days = created.days,
        "Leave requested"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/leaves - all requests, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<LeaveRequestDetail>>> {
    let leaves = leave::find_all_detailed(state.pool()).await?;
    Ok(Json(leaves))
}

/// GET /api/leaves/employee/{employee_id} - one employee's requests, newest first
pub async fn list_for_employee(
    State(state): State<ServerState>,
    Path(employee_id): Path<i64>,
) -> AppResult<Json<Vec<LeaveRequestDetail>>> {
    let leaves = leave::find_by_employee(state.pool(), employee_id).await?;
    Ok(Json(leaves))
}

/// PUT /api/leaves/{id}/status - approve or reject a pending request
pub async fn update_status(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<LeaveStatusUpdate>,
) -> AppResult<Json<LeaveRequestDetail>> {
    let status = parse_resolution(&payload.status)?;
    validate_optional_text(&payload.comments, "comments", MAX_NOTE_LEN)?;

    let pool = state.pool();
    if leave::find_by_id(pool, id).await?.is_none() {
        return Err(leave_not_found(id));
    }

    let comments = payload.comments.as_deref().map(str::trim);
    if !leave::resolve(pool, id, status, current.id, comments).await? {
        return Err(AppError::new(ErrorCode::LeaveAlreadyResolved).with_detail("id", id));
    }

    tracing::info!(leave_id = id, status = %status, approver = current.id, "Leave resolved");

    let resolved = leave::find_detail(pool, id)
        .await?
        .ok_or_else(|| leave_not_found(id))?;
    Ok(Json(resolved))
}

/// GET /api/leaves/balance/{employee_id}?year= - remaining days per type
pub async fn balance(
    State(state): State<ServerState>,
    Path(employee_id): Path<i64>,
    AppQuery(query): AppQuery<YearQuery>,
) -> AppResult<Json<LeaveBalance>> {
    let year = query.year.unwrap_or_else(current_year);
    let (from, to) = year_bounds(year)?;

    let pool = state.pool();
    if employee::find_by_id(pool, employee_id).await?.is_none() {
        return Err(AppError::new(ErrorCode::EmployeeNotFound).with_detail("id", employee_id));
    }

    let used = leave::approved_days_by_type(pool, employee_id, from, to).await?;
    Ok(Json(hr::remaining_balance(&used)))
}

/// GET /api/leaves/top-takers?year= - five employees with most approved days
pub async fn top_takers(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<YearQuery>,
) -> AppResult<Json<Vec<LeaveTaker>>> {
    let year = query.year.unwrap_or_else(current_year);
    let (from, to) = year_bounds(year)?;
    let rows = leave::top_takers(state.pool(), from, to, TOP_TAKERS_LIMIT).await?;
    Ok(Json(rows))
}

/// GET /api/leaves/calendar?startDate=&endDate= - approved leave inside the range
pub async fn calendar(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<CalendarQuery>,
) -> AppResult<Json<Vec<CalendarEvent>>> {
    let start = parse_date(query.start_date.as_deref(), "startDate")?;
    let end = parse_date(query.end_date.as_deref(), "endDate")?;

    let leaves = leave::approved_within(state.pool(), start, end).await?;
    let events = leaves
        .into_iter()
        .map(|detail| CalendarEvent {
            id: detail.leave.id,
            title: format!(
                "{} {} - {}",
                detail.employee_first_name, detail.employee_last_name, detail.leave.leave_type
            ),
            start: detail.leave.start_date,
            end: detail.leave.end_date,
            leave_type: detail.leave.leave_type,
        })
        .collect();
    Ok(Json(events))
}

fn leave_not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::LeaveNotFound).with_detail("id", id)
}

/// Only terminal states may be set through the status endpoint
fn parse_resolution(value: &str) -> Result<LeaveStatus, AppError> {
    match value.parse::<LeaveStatus>() {
        Ok(status) if status.is_terminal() => Ok(status),
        _ => Err(AppError::new(ErrorCode::LeaveInvalidStatus).with_detail("status", value)),
    }
}

fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate), AppError> {
    hr::year_bounds(year).ok_or_else(|| {
        AppError::with_message(ErrorCode::ValueOutOfRange, "Invalid year").with_detail("year", year)
    })
}

fn parse_date(value: Option<&str>, field: &str) -> Result<NaiveDate, AppError> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::RequiredField, "Start date and end date are required")
                .with_detail("field", field)
        })?;
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("{field} must be a date in YYYY-MM-DD format"),
        )
        .with_detail("field", field)
    })
}
