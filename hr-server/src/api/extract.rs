//! Body and query extractors that reject with the API error envelope
//!
//! axum's own `Json` / `Query` reject with plain-text 4xx bodies; these
//! wrappers turn any rejection into a 400 `ValidationFailed` [`AppError`].

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::utils::AppError;

/// JSON body extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

/// Query string extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct AppQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(query_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    let text = rejection.body_text();
    // "Failed to deserialize the JSON body into the target type: missing field `email` at line 1 column 2"
    let message = match text.find("missing field `") {
        Some(start) => {
            let rest = &text[start + "missing field `".len()..];
            match rest.find('`') {
                Some(end) => format!("Missing required field: {}", &rest[..end]),
                None => text.clone(),
            }
        }
        None => text.clone(),
    };
    AppError::validation(message)
}

fn query_rejection(rejection: QueryRejection) -> AppError {
    AppError::validation(rejection.body_text())
}
