//! Tokens, password hashing and the `/api/` guard

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService, bearer_token};
pub use middleware::require_auth;
pub use password::{hash_password, verify_password};
