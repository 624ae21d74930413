use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use service::users::UserError;
use tracing::debug;

use crate::errors::ApiError;

pub const INVALID_BODY: &str = "Invalid JSON body";

/// JSON body that falls back to `T::default()` when the request carries no
/// JSON (missing/other content type or an empty body).
///
/// Malformed JSON is still rejected with a 400.
#[derive(Debug, Clone, Default)]
pub struct OptionalJson<T>(pub T);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("application/json"))
        .unwrap_or(false)
}

#[async_trait]
impl<S, T> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(&req);
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::BadRequest(INVALID_BODY.into()))?;
        if !json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }
        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            debug!(error = %e, "rejected request body");
            ApiError::BadRequest(INVALID_BODY.into())
        })
    }
}

/// `:id` path segment as a user id.
///
/// Undecodable segments and non-integers are reported as missing users,
/// never as 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub u64);

impl UserId {
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<u64>().ok().map(Self)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Path::<String>::from_request_parts(parts, state).await.map_err(|e| {
            debug!(error = %e, "unusable user id segment");
            ApiError::User(UserError::NotFound)
        })?;
        Self::parse(&raw.0).ok_or(ApiError::User(UserError::NotFound))
    }
}
