//! Data models
//!
//! Shared between hr-server and API clients. Wire format is camelCase.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY), timestamps are Unix
//! millis and calendar dates are `YYYY-MM-DD`.

pub mod contact;
pub mod employee;
pub mod leave;
pub mod payroll;
pub mod report;
pub mod user;

// Re-exports
pub use contact::*;
pub use employee::*;
pub use leave::*;
pub use payroll::*;
pub use report::*;
pub use user::*;
