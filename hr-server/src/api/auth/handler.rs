//! Authentication Handlers

use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::api::AppJson;
use crate::auth::{CurrentUser, hash_password, verify_password};
use crate::core::ServerState;
use crate::db::repository::{RepoError, user};
use crate::security_log;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, MIN_PASSWORD_LEN, validate_email, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{LoginRequest, LoginResponse, RegisterRequest, User, UserResponse};

/// POST /api/auth/register - create an account and sign it in
pub async fn register(
    State(state): State<ServerState>,
    AppJson(req): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<LoginResponse>)> {
    let username = req.username.trim();
    let email = req.email.trim();
    validate_required_text(username, "username", MAX_NAME_LEN)?;
    validate_email(email, "email")?;
    if req.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::new(ErrorCode::PasswordTooShort));
    }
    if req.password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password is too long (max {MAX_PASSWORD_LEN})"
        )));
    }

    let pool = state.pool();
    if user::find_by_username(pool, username).await?.is_some() {
        return Err(AppError::new(ErrorCode::UsernameExists));
    }
    if user::find_by_email(pool, email).await?.is_some() {
        return Err(AppError::new(ErrorCode::UserEmailExists));
    }

    let hash_pass = hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;
    let role = req.role.unwrap_or_default();

    // A concurrent registration can still win the race; the unique index decides
    let created = user::create(pool, username, email, &hash_pass, role)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(msg) if msg.contains("user.email") => {
                AppError::new(ErrorCode::UserEmailExists)
            }
            RepoError::Duplicate(_) => AppError::new(ErrorCode::UsernameExists),
            other => other.into(),
        })?;

    tracing::info!(user_id = created.id, username = %created.username, role = %created.role, "User registered");

    let response = issue_token(&state, created)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login - username or email plus password
pub async fn login(
    State(state): State<ServerState>,
    AppJson(req): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let pool = state.pool();
    let identifier = req
        .username
        .as_deref()
        .or(req.email.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("username or email is required"))?;

    let found = match req.username.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(username) => user::find_by_username(pool, username).await?,
        None => user::find_by_email(pool, identifier).await?,
    };

    // Same error for unknown user and wrong password
    let found = match found {
        Some(u) if verify_password(&req.password, &u.hash_pass) => u,
        Some(_) | None => {
            security_log!("WARN", "login_failed", identifier = identifier.to_string());
            return Err(AppError::invalid_credentials());
        }
    };

    tracing::info!(user_id = found.id, username = %found.username, "User logged in");
    Ok(Json(issue_token(&state, found)?))
}

/// GET /api/auth/me - the authenticated user
pub async fn me(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Json<UserResponse>> {
    let found = user::find_by_id(state.pool(), current.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;
    Ok(Json(found.into()))
}

fn issue_token(state: &ServerState, user: User) -> AppResult<LoginResponse> {
    let token = state
        .get_jwt_service()
        .issue(user.id, &user.username, user.role.as_str())
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;
    Ok(LoginResponse {
        token,
        user: user.into(),
    })
}
