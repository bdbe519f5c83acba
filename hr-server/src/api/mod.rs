//! API routes
//!
//! - [`health`] - liveness and store probe
//! - [`auth`] - register, login, current user
//! - [`contact`] - public contact form
//! - [`employees`] - employee CRUD and dashboards
//! - [`leaves`] - leave workflow, balance and calendar
//! - [`payroll`] - payroll runs and reports

pub mod extract;

pub mod auth;
pub mod contact;
pub mod health;

pub mod employees;
pub mod leaves;
pub mod payroll;

pub use crate::utils::{AppError, AppResult};
pub use extract::{AppJson, AppQuery};
