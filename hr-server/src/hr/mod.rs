//! HR calculations
//!
//! Pure functions used by the handlers: leave day counts and balances,
//! payroll net salary, salary bands. No store access.

pub mod leave;
pub mod payroll;
pub mod salary;

pub use leave::{LEAVE_POLICY, inclusive_days, remaining_balance, year_bounds};
pub use payroll::{fill_trends, net_salary, validate_period};
pub use salary::{salary_band, salary_ranges};
