use crate::BoxError;
use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 5000 | HTTP listen port |
/// | DATABASE_URL | sqlite:hr.db | SQLite database URL |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | JWT_SECRET | (dev fallback) | HS256 secret, at least 32 chars |
/// | JWT_EXPIRATION_MINUTES | 1440 | Token lifetime |
/// | JWT_ISSUER | hr-server | Token issuer |
/// | JWT_AUDIENCE | hr-clients | Token audience |
/// | CONTACT_EMAIL_TO | (unset) | Contact form recipient; unset logs messages only |
/// | CONTACT_EMAIL_FROM | noreply@hr.local | Sender address for relayed messages |
/// | SES_REGION | (AWS default) | Region of the SES client |
///
/// Logging is configured separately (`LOG_LEVEL`, `LOG_DIR`, `LOG_JSON`), see
/// [`crate::setup_environment`].
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub database_url: String,
    /// development | staging | production
    pub environment: String,
    pub jwt: JwtConfig,
    pub contact_email_to: Option<String>,
    pub contact_email_from: String,
    pub ses_region: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        Ok(Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            database_url: std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:hr.db".into()),
            jwt: JwtConfig::from_env(&environment)?,
            contact_email_to: std::env::var("CONTACT_EMAIL_TO")
                .ok()
                .filter(|s| !s.is_empty()),
            contact_email_from: std::env::var("CONTACT_EMAIL_FROM")
                .unwrap_or_else(|_| "noreply@hr.local".into()),
            ses_region: std::env::var("SES_REGION").ok().filter(|s| !s.is_empty()),
            environment,
        })
    }

    /// In-process configuration for tests and embedded use: in-memory
    /// database, fixed JWT secret, log-only email relay.
    pub fn for_testing() -> Self {
        Self {
            http_port: 0,
            database_url: "sqlite::memory:".into(),
            environment: "development".into(),
            jwt: JwtConfig {
                secret: "test-secret-key-at-least-32-characters-long".into(),
                expiration_minutes: 60,
                issuer: "hr-server".into(),
                audience: "hr-clients".into(),
            },
            contact_email_to: None,
            contact_email_from: "noreply@hr.local".into(),
            ses_region: None,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testing_config() {
        let config = Config::for_testing();
        assert_eq!(config.environment, "development");
        assert!(!config.is_production());
        assert!(config.contact_email_to.is_none());
        assert!(config.jwt.secret.len() >= 32);
    }
}
