//! Access log

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::auth::CurrentUser;

/// One line per finished request, at `warn` for 4xx and 5xx
///
/// The route template (`/api/employees/{id}`) is logged rather than the raw
/// path when the request matched a route.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let method = req.method().clone();
    let route = match req.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_owned(),
        None => req.uri().path().to_owned(),
    };

    let response = next.run(req).await;
    let user_id = response.extensions().get::<CurrentUser>().map(|u| u.id);

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let request_id = request_id.as_deref().unwrap_or("-");

    if status >= 400 {
        tracing::warn!(request_id, %method, route = %route, status, elapsed_ms, ?user_id, "request failed");
    } else {
        tracing::info!(request_id, %method, route = %route, status, elapsed_ms, ?user_id, "request");
    }

    response
}
