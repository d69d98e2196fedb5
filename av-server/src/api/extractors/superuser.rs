use crate::api::extractors::current_identity::CurrentIdentity;
use crate::{ApiError, AppState};

use av_core::Identity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Authenticated caller that must be a superuser.
///
/// Runs the full [`CurrentIdentity`] resolution first, so an
/// unauthenticated request still gets 401, not 403.
pub struct Superuser(pub Identity);

impl FromRequestParts<AppState> for Superuser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let CurrentIdentity(identity) =
                CurrentIdentity::from_request_parts(parts, state).await?;

            if !identity.is_superuser {
                log::warn!("Identity {} denied superuser-only request", identity.id);
                return Err(ApiError::forbidden());
            }

            Ok(Superuser(identity))
        }
    }
}
