//! Session endpoints: password login and token refresh.

use crate::api::extractors::current_identity::bearer_token;
use crate::{ApiError, ApiResult, AppState, LoginRequest, TokenResponse};

use av_db::IdentityRepository;

use axum::http::HeaderMap;
use axum::{Json, extract::State};
use log::{info, warn};

use std::sync::LazyLock;

// Burned on the unknown-email path so both login failure branches cost one
// argon2 verification; nothing ever verifies against a placeholder hash.
static DECOY_HASH: LazyLock<String> =
    LazyLock::new(|| av_auth::generate_placeholder_hash().unwrap_or_default());

/// POST /api/v1/auth/login
///
/// Verify email + password and issue a session token. Unknown email and
/// wrong password are indistinguishable to the caller: both produce the
/// same 401 with no field information, and both branches perform a hash
/// verification so response timing does not leak which one it was.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let repo = IdentityRepository::new(state.pool.clone());

    let Some(identity) = repo.find_by_email(&request.email).await? else {
        av_auth::verify_password(&request.password, &DECOY_HASH);
        warn!("Login attempt for unknown email");
        return Err(ApiError::unauthorized());
    };

    let hash = identity.password_hash.as_deref().unwrap_or("");
    if !av_auth::verify_password(&request.password, hash) {
        warn!("Login attempt with wrong password for identity {}", identity.id);
        return Err(ApiError::unauthorized());
    }

    let access_token = state.token_service.issue(identity.id)?;
    info!("Issued session token for identity {}", identity.id);

    Ok(Json(TokenResponse::bearer(access_token)))
}

/// POST /api/v1/auth/refresh
///
/// Exchange the presented token for a fresh one. The incoming token must
/// be correctly signed but may already be expired (refresh window policy
/// lives in `TokenService::refresh`). No extractor here: the extractor
/// would reject expired tokens before we see them.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<TokenResponse>> {
    let token = bearer_token(&headers)?;
    let access_token = state.token_service.refresh(token)?;

    Ok(Json(TokenResponse::bearer(access_token)))
}
