//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::AppJson;
use crate::core::ServerState;
use crate::db::repository::{RepoError, employee};
use crate::hr;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{
    DataList, DepartmentHeadcount, Employee, EmployeeCreate, EmployeeLeaveCount, EmployeeUpdate,
    GeneralStats, MessageResponse, SalaryStats,
};
use shared::util::{month_start, next_month_start, today};

const RECENT_JOINEES: i64 = 5;

/// POST /api/employees - create an employee
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    validate_create(&payload)?;
    let created = employee::create(state.pool(), payload, today())
        .await
        .map_err(employee_error)?;
    tracing::info!(employee_id = created.id, "Employee created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/employees - all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_all(state.pool()).await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let found = employee::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(found))
}

/// PUT /api/employees/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    validate_update(&payload)?;
    let updated = employee::update(state.pool(), id, payload)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => not_found(id),
            other => employee_error(other),
        })?;
    tracing::info!(employee_id = id, "Employee updated");
    Ok(Json(updated))
}

/// DELETE /api/employees/{id} - hard delete (leave requests and payroll runs cascade)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    employee::delete(state.pool(), id).await.map_err(|e| match e {
        RepoError::NotFound(_) => not_found(id),
        other => other.into(),
    })?;
    tracing::info!(employee_id = id, "Employee deleted");
    Ok(Json(MessageResponse::new("Employee deleted successfully")))
}

/// GET /api/employees/stats/department - headcount and salary per department
pub async fn department_stats(
    State(state): State<ServerState>,
) -> AppResult<Json<DataList<DepartmentHeadcount>>> {
    let rows = employee::department_headcount(state.pool()).await?;
    Ok(Json(rows.into()))
}

/// GET /api/employees/stats/general - dashboard overview
pub async fn general_stats(State(state): State<ServerState>) -> AppResult<Json<GeneralStats>> {
    let pool = state.pool();
    let total_employees = employee::count(pool).await?;
    let total_salary = employee::total_salary(pool).await?;
    let recent_joinees = employee::recent_joinees(pool, RECENT_JOINEES).await?;
    let department_wise_count = employee::department_counts(pool).await?;

    Ok(Json(GeneralStats {
        total_employees,
        total_salary,
        recent_joinees,
        department_wise_count,
    }))
}

/// GET /api/employees/stats/leaves - leave requests per employee this month
pub async fn leave_stats(
    State(state): State<ServerState>,
) -> AppResult<Json<DataList<EmployeeLeaveCount>>> {
    let now = today();
    let (from, to) = (month_start(now), next_month_start(now));
    let rows = employee::leave_counts(state.pool(), from, to).await?;
    Ok(Json(rows.into()))
}

/// GET /api/employees/stats/salary - salary aggregates and bands
pub async fn salary_stats(State(state): State<ServerState>) -> AppResult<Json<SalaryStats>> {
    let pool = state.pool();
    let stats = employee::salary_summary(pool).await?;
    let salaries = employee::all_salaries(pool).await?;
    Ok(Json(SalaryStats {
        stats,
        salary_ranges: hr::salary_ranges(&salaries),
    }))
}

fn not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::EmployeeNotFound).with_detail("id", id)
}

fn employee_error(err: RepoError) -> AppError {
    match err {
        RepoError::Duplicate(_) => AppError::new(ErrorCode::EmployeeEmailExists),
        other => other.into(),
    }
}

fn validate_salary(salary: f64) -> Result<(), AppError> {
    if !salary.is_finite() || salary < 0.0 {
        return Err(AppError::new(ErrorCode::EmployeeInvalidSalary).with_detail("field", "salary"));
    }
    Ok(())
}

fn validate_create(payload: &EmployeeCreate) -> Result<(), AppError> {
    validate_required_text(&payload.first_name, "firstName", MAX_NAME_LEN)?;
    validate_required_text(&payload.last_name, "lastName", MAX_NAME_LEN)?;
    validate_email(&payload.email, "email")?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.department, "department", MAX_NAME_LEN)?;
    validate_required_text(&payload.position, "position", MAX_NAME_LEN)?;
    validate_salary(payload.salary)
}

fn validate_update(payload: &EmployeeUpdate) -> Result<(), AppError> {
    if let Some(v) = &payload.first_name {
        validate_required_text(v, "firstName", MAX_NAME_LEN)?;
    }
    if let Some(v) = &payload.last_name {
        validate_required_text(v, "lastName", MAX_NAME_LEN)?;
    }
    if let Some(v) = &payload.email {
        validate_email(v, "email")?;
    }
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    if let Some(v) = &payload.department {
        validate_required_text(v, "department", MAX_NAME_LEN)?;
    }
    if let Some(v) = &payload.position {
        validate_required_text(v, "position", MAX_NAME_LEN)?;
    }
    if let Some(salary) = payload.salary {
        validate_salary(salary)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(salary: f64) -> EmployeeCreate {
        EmployeeCreate {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: None,
            department: "Engineering".into(),
            position: "Engineer".into(),
            salary,
            joining_date: None,
        }
    }

    #[test]
    fn test_validate_create() {
        assert!(validate_create(&payload(50000.0)).is_ok());
        assert!(validate_create(&payload(0.0)).is_ok());
        assert_eq!(
            validate_create(&payload(-1.0)).unwrap_err().code,
            ErrorCode::EmployeeInvalidSalary
        );
        assert!(validate_create(&payload(f64::INFINITY)).is_err());

        let mut blank = payload(1.0);
        blank.department = "  ".into();
        assert_eq!(
            validate_create(&blank).unwrap_err().code,
            ErrorCode::ValidationFailed
        );
    }

    #[test]
    fn test_validate_update_only_checks_present_fields() {
        assert!(validate_update(&EmployeeUpdate::default()).is_ok());
        let bad = EmployeeUpdate {
            email: Some("nope".into()),
            ..Default::default()
        };
        assert!(validate_update(&bad).is_err());
        let bad = EmployeeUpdate {
            salary: Some(-10.0),
            ..Default::default()
        };
        assert!(validate_update(&bad).is_err());
    }
}
