//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use av_core::Identity;
use av_db::IdentityRepository;

use std::future::Future;

use axum::http::HeaderMap;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Authenticated caller, resolved from the bearer token.
///
/// Missing, malformed, expired, or badly signed tokens all reject as the
/// same 401. A token whose subject was deleted rejects as 404
/// `IDENTITY_NOT_FOUND` instead, so a stale session is distinguishable
/// from a bad one in the logs and to the client.
pub struct CurrentIdentity(pub Identity);

/// Pull the token out of `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(ApiError::unauthorized)
}

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = bearer_token(&parts.headers)?;
            let subject = state.token_service.validate(token)?;

            let repo = IdentityRepository::new(state.pool.clone());
            let identity = repo
                .find_by_id(subject)
                .await
                .map_err(ApiError::from)?
                .ok_or_else(|| ApiError::identity_not_found(subject))?;

            Ok(CurrentIdentity(identity))
        }
    }
}
