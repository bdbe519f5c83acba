//! Field checks shared by the request validators
//!
//! SQLite does not enforce TEXT lengths, so the limits live here.

use crate::utils::AppError;

/// Names, departments, positions, usernames
pub const MAX_NAME_LEN: usize = 200;
/// Leave reasons, approval comments, payroll remarks, contact subjects
pub const MAX_NOTE_LEN: usize = 500;
pub const MAX_MESSAGE_LEN: usize = 5000;
/// Phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MIN_PASSWORD_LEN: usize = 8;

fn check_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    match value.len() {
        len if len > max_len => Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field)),
        _ => Ok(()),
    }
}

pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")).with_detail("field", field));
    }
    check_len(value, field, max_len)
}

/// Absent values pass
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    value.as_deref().map_or(Ok(()), |v| check_len(v, field, max_len))
}

/// Validate a trimmed string has at least `min_len` characters.
pub fn validate_min_len(value: &str, field: &str, min_len: usize) -> Result<(), AppError> {
    if value.trim().chars().count() < min_len {
        return Err(AppError::validation(format!(
            "{field} must be at least {min_len} characters"
        )));
    }
    Ok(())
}

/// Syntactic email check: one `@`, non-empty local part, dotted domain.
pub fn validate_email(value: &str, field: &str) -> Result<(), AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    check_len(value, field, MAX_EMAIL_LEN)?;
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
                && domain
                    .split('.')
                    .filter(|label| !label.is_empty())
                    .count()
                    >= 2
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(AppError::validation(format!("{field} is not a valid email")));
    }
    Ok(())
}

/// Validate a money amount is finite and non-negative.
pub fn validate_amount(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}
