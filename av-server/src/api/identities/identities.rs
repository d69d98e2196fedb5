//! Identity REST API handlers

use crate::api::extractors::{current_identity::CurrentIdentity, superuser::Superuser};
use crate::{ApiError, ApiResult, AppState, DeleteResponse, IdentityResponse, RegisterRequest};

use av_core::{Identity, IdentityDto, IdentityPatch};
use av_db::IdentityRepository;

use axum::{
    Json,
    extract::{Path, State},
};
use log::info;
use uuid::Uuid;

const MIN_PASSWORD_CHARS: usize = 8;

/// POST /api/v1/identities
///
/// Register a local account. Duplicate email maps to 400 EMAIL_TAKEN.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<Json<IdentityResponse>> {
    if !request.email.contains('@') {
        return Err(ApiError::validation(
            "email must be a valid address",
            Some("email"),
        ));
    }
    if request.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ApiError::validation(
            format!("password must be at least {} characters", MIN_PASSWORD_CHARS),
            Some("password"),
        ));
    }

    let hash = av_auth::hash_password(&request.password)
        .map_err(|e| ApiError::internal(format!("password hashing failed: {}", e)))?;
    let identity = Identity::new_local(request.email, request.display_name, hash);

    let repo = IdentityRepository::new(state.pool.clone());
    repo.create(&identity).await?;

    info!("Registered identity {}", identity.id);

    Ok(Json(IdentityResponse {
        identity: IdentityDto::from(identity),
    }))
}

/// GET /api/v1/identities/me
pub async fn me(CurrentIdentity(identity): CurrentIdentity) -> Json<IdentityResponse> {
    Json(IdentityResponse {
        identity: IdentityDto::from(identity),
    })
}

/// PATCH /api/v1/identities/me
///
/// Partial update of the caller's own record. Only superusers may touch
/// `is_superuser`; self-elevation is refused with 403.
pub async fn update_me(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Json(patch): Json<IdentityPatch>,
) -> ApiResult<Json<IdentityResponse>> {
    if patch.is_superuser.is_some() && !identity.is_superuser {
        log::warn!("Identity {} attempted to change is_superuser", identity.id);
        return Err(ApiError::forbidden());
    }

    if patch.is_empty() {
        return Ok(Json(IdentityResponse {
            identity: IdentityDto::from(identity),
        }));
    }

    let repo = IdentityRepository::new(state.pool.clone());
    let updated = repo.apply_patch(identity.id, &patch).await?;

    Ok(Json(IdentityResponse {
        identity: IdentityDto::from(updated),
    }))
}

/// DELETE /api/v1/identities/{id}
///
/// Superuser-only. Owned files go with the identity (cascade in the
/// schema); their bytes on disk are left for external cleanup.
pub async fn delete_identity(
    State(state): State<AppState>,
    Superuser(caller): Superuser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let identity_id = Uuid::parse_str(&id)?;

    let repo = IdentityRepository::new(state.pool.clone());
    repo.remove(identity_id).await?;

    info!("Identity {} deleted by superuser {}", identity_id, caller.id);

    Ok(Json(DeleteResponse { deleted: true }))
}
