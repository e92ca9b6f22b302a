//! Caller identity, as asserted by the upstream auth gateway.
//!
//! Token verification happens before requests reach this service; the gateway
//! forwards the verified uid in `x-authenticated-uid`.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;

pub const CALLER_UID_HEADER: &str = "x-authenticated-uid";

/// The authenticated caller of a callable endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub uid: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(CALLER_UID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|uid| !uid.is_empty())
            .map(|uid| CallerIdentity {
                uid: uid.to_string(),
            })
            .ok_or_else(|| AppError::Unauthenticated("User must be authenticated".to_string()))
    }
}
