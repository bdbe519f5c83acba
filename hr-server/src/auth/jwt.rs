//! HS256 access tokens

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::BoxError;

const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime, one day unless overridden
    pub expiration_minutes: i64,
    pub issuer: String,
    pub audience: String,
}

impl JwtConfig {
    /// Reads `JWT_SECRET`, `JWT_EXPIRATION_MINUTES`, `JWT_ISSUER` and
    /// `JWT_AUDIENCE`. Only development may run without a secret; it gets a
    /// random one that lives as long as the process.
    pub fn from_env(environment: &str) -> Result<Self, BoxError> {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if secret.len() < MIN_SECRET_LEN => {
                return Err(format!("JWT_SECRET must be at least {MIN_SECRET_LEN} characters").into());
            }
            Ok(secret) => secret,
            Err(_) if environment != "development" => {
                return Err(format!("JWT_SECRET is required in {environment}").into());
            }
            Err(_) => {
                tracing::warn!("JWT_SECRET not set, tokens will not survive a restart");
                random_secret()?
            }
        };

        let var = |name: &str, default: &str| std::env::var(name).unwrap_or_else(|_| default.to_string());
        Ok(Self {
            secret,
            expiration_minutes: var("JWT_EXPIRATION_MINUTES", "1440").parse().unwrap_or(1440),
            issuer: var("JWT_ISSUER", "hr-server"),
            audience: var("JWT_AUDIENCE", "hr-clients"),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub aud: String,
}

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("token expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(String),

    #[error("failed to sign token: {0}")]
    Signing(String),

    #[error("no secure random source available")]
    Random,
}

/// 64 printable characters from the system RNG
pub fn random_secret() -> Result<String, JwtError> {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.~+=";

    let mut raw = [0u8; 64];
    SystemRandom::new().fill(&mut raw).map_err(|_| JwtError::Random)?;
    Ok(raw
        .into_iter()
        .map(|b| CHARSET[b as usize % CHARSET.len()] as char)
        .collect())
}

/// Token from an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

/// The authenticated caller, placed in request extensions by
/// [`crate::auth::require_auth`]
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub role: String,
}

#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&config.audience]);
        validation.set_issuer(&[&config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            config,
        }
    }

    pub fn issue(&self, user_id: i64, username: &str, role: &str) -> Result<String, JwtError> {
        let iat = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_owned(),
            role: role.to_owned(),
            exp: (iat + Duration::minutes(self.config.expiration_minutes)).timestamp(),
            iat: iat.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::Signing(e.to_string()))
    }

    /// Checks signature, expiry, issuer and audience
    pub fn verify(&self, token: &str) -> Result<CurrentUser, JwtError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Invalid(e.to_string()),
            })?
            .claims;

        let id = claims
            .sub
            .parse()
            .map_err(|_| JwtError::Invalid(format!("subject {:?} is not a user id", claims.sub)))?;
        Ok(CurrentUser {
            id,
            username: claims.username,
            role: claims.role,
        })
    }
}
