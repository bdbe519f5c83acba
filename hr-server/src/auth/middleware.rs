//! Bearer-token guard for `/api/`

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::Method;

use crate::auth::{JwtError, bearer_token};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

const PUBLIC_API_ROUTES: &[&str] = &[
    "/api/auth/login",
    "/api/auth/register",
    "/api/contact",
    "/api/health",
];

/// Whether a request may pass without a token: CORS preflight, anything
/// outside `/api/`, and the public endpoints above
pub fn is_public(method: &Method, path: &str) -> bool {
    method == Method::OPTIONS || !path.starts_with("/api/") || PUBLIC_API_ROUTES.contains(&path)
}

/// Missing header is 401 NotAuthenticated, an expired token 401 TokenExpired,
/// anything else 401 TokenInvalid. On success the caller's
/// [`CurrentUser`](crate::auth::CurrentUser) is added to the request
/// extensions, and to the response's for the access log.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if is_public(req.method(), req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let Some(header) = req.headers().get(http::header::AUTHORIZATION) else {
        security_log!("WARN", "auth_missing", path = req.uri().path());
        return Err(AppError::unauthorized());
    };

    let verified = header
        .to_str()
        .ok()
        .and_then(bearer_token)
        .ok_or_else(|| JwtError::Invalid("malformed authorization header".into()))
        .and_then(|token| state.get_jwt_service().verify(token));

    match verified {
        Ok(user) => {
            req.extensions_mut().insert(user.clone());
            let mut response = next.run(req).await;
            response.extensions_mut().insert(user);
            Ok(response)
        }
        Err(e) => {
            security_log!("WARN", "auth_failed", error = e.to_string(), path = req.uri().path());
            Err(match e {
                JwtError::Expired => AppError::token_expired(),
                _ => AppError::invalid_token("Token is not valid"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_requests() {
        for path in ["/api/auth/login", "/api/auth/register", "/api/contact", "/api/health", "/"] {
            assert!(is_public(&Method::POST, path), "{path}");
        }
        assert!(is_public(&Method::OPTIONS, "/api/employees"));
        assert!(!is_public(&Method::GET, "/api/auth/me"));
        assert!(!is_public(&Method::GET, "/api/employees"));
        assert!(!is_public(&Method::GET, "/api/contact/extra"));
    }
}
