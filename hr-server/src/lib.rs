//! HR Server - employee, leave and payroll service
//!
//! # Module layout
//!
//! ```text
//! hr-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT + Argon2, require_auth middleware
//! ├── db/            # SQLite pool and repositories
//! ├── hr/            # pure leave / payroll / salary calculations
//! ├── api/           # HTTP routes and handlers
//! ├── routes/        # router assembly and tower layers
//! ├── middleware/    # request logging
//! ├── email/         # contact form relay
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod email;
pub mod hr;
pub mod middleware;
pub mod routes;
pub mod utils;

pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use routes::build_app;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;

/// Audit event on the `security` target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Load `.env` and initialise logging from `LOG_LEVEL` / `LOG_DIR`
pub fn setup_environment() -> Result<(), BoxError> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    let json = std::env::var("LOG_JSON")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false);

    init_logger_with_file(log_level.as_deref(), json, log_dir.as_deref())?;
    Ok(())
}
