use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::email::EmailService;
use crate::utils::AppError;

/// Server state - shared handles for every handler
///
/// Cheap to clone: the pool, JWT service and email relay are all shared.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Immutable configuration |
/// | db | DbService | SQLite pool |
/// | jwt_service | Arc<JwtService> | Token issue / validation |
/// | email | EmailService | Contact form relay |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub jwt_service: Arc<JwtService>,
    pub email: EmailService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService, jwt_service: Arc<JwtService>, email: EmailService) -> Self {
        Self {
            config,
            db,
            jwt_service,
            email,
        }
    }

    /// Initialize server state
    ///
    /// 1. Database (connect + migrations)
    /// 2. JWT service
    /// 3. Email relay (SES when a recipient is configured)
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_url).await?;
        let jwt_service = Arc::new(JwtService::new(config.jwt.clone()));
        let email = EmailService::from_config(config).await;

        if config.is_production() && config.contact_email_to.is_none() {
            tracing::warn!("CONTACT_EMAIL_TO not set; contact messages will only be logged");
        }

        Ok(Self::new(config.clone(), db, jwt_service, email))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
