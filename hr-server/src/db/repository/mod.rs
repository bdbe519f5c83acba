//! Repository Module
//!
//! Free async functions over `&SqlitePool`, one module per table.

pub mod employee;
pub mod leave;
pub mod payroll;
pub mod user;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound("Row not found".into()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.message().to_string())
            }
            sqlx::Error::Database(db_err)
                if db_err.is_check_violation() || db_err.is_foreign_key_violation() =>
            {
                RepoError::Validation(db_err.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Repository database error");
                AppError::database(msg)
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[tokio::test]
    async fn test_unique_violation_maps_to_duplicate() {
        let pool = test_pool().await;
        insert_user(&pool, "ada").await;
        let err: RepoError = sqlx::query(
            "INSERT INTO user (username, email, hash_pass, role, created_at, updated_at) \
             VALUES ('ada', 'other@example.com', 'x', 'hr', 0, 0)",
        )
        .execute(&pool)
        .await
        .unwrap_err()
        .into();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_check_violation_maps_to_validation() {
        let pool = test_pool().await;
        let err: RepoError = sqlx::query(
            "INSERT INTO employee (first_name, last_name, email, department, position, salary, joining_date, created_at, updated_at) \
             VALUES ('A', 'B', 'a@b.com', 'X', 'Y', -5, '2024-01-01', 0, 0)",
        )
        .execute(&pool)
        .await
        .unwrap_err()
        .into();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[test]
    fn test_repo_error_to_app_error() {
        let err: AppError = RepoError::NotFound("Employee 9".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        let err: AppError = RepoError::Validation("bad".into()).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let err: AppError = RepoError::Database("locked".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
