//! Federated login endpoints (OAuth authorization-code flow).
//!
//! Both routes answer 404 when no OAuth client is configured. Provider
//! failures reach the client as one generic 502; the detail is logged.

use crate::{ApiError, ApiResult, AppState, AuthorizeResponse, CallbackQuery, TokenResponse};

use av_federation::{FederationClient, IdentityReconciler};

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use log::info;

fn federation_parts(
    state: &AppState,
) -> Result<(&Arc<FederationClient>, &Arc<IdentityReconciler>), ApiError> {
    match (&state.federation, &state.reconciler) {
        (Some(client), Some(reconciler)) => Ok((client, reconciler)),
        _ => Err(ApiError::not_found("Federated login is not configured")),
    }
}

/// GET /api/v1/auth/federated/login
///
/// Hand the browser the provider's authorization URL
pub async fn federated_login(
    State(state): State<AppState>,
) -> ApiResult<Json<AuthorizeResponse>> {
    let (client, _) = federation_parts(&state)?;
    let auth_url = client.authorize_url()?;

    Ok(Json(AuthorizeResponse { auth_url }))
}

/// GET /api/v1/auth/federated/callback?code=
///
/// Complete the flow: exchange the single-use code, fetch the provider
/// profile, reconcile it to a local identity, issue a session token.
pub async fn federated_callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> ApiResult<Json<TokenResponse>> {
    let (client, reconciler) = federation_parts(&state)?;

    let provider_token = client.exchange_code(&query.code).await?;
    let profile = client.fetch_profile(&provider_token).await?;
    let identity = reconciler.reconcile(&profile).await?;

    let access_token = state.token_service.issue(identity.id)?;
    info!("Federated login completed for identity {}", identity.id);

    Ok(Json(TokenResponse::bearer(access_token)))
}
