use crate::ApiError;

use av_core::StoreError;
use av_federation::FederationError;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn response_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_generic_body() {
    let (status, json) = response_json(ApiError::unauthorized()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    // Body must not say why the credentials were rejected
    assert_eq!(json["error"]["message"], "Authentication required");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let (status, json) = response_json(ApiError::forbidden()).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_identity_not_found_has_distinct_code() {
    let (status, json) = response_json(ApiError::identity_not_found(Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "IDENTITY_NOT_FOUND");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) =
        response_json(ApiError::validation("password too short", Some("password"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "password");
}

#[tokio::test]
async fn test_federation_failure_hides_provider_detail() {
    let error = ApiError::from(FederationError::exchange("provider said 503"));
    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "FEDERATION_FAILED");
    assert!(!json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("503"));
}

#[tokio::test]
async fn test_email_conflict_maps_to_email_taken() {
    let error = ApiError::from(FederationError::email_conflict());
    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "EMAIL_TAKEN");
}

#[tokio::test]
async fn test_duplicate_email_store_error_maps_to_email_taken() {
    let error = ApiError::from(StoreError::duplicate("email"));
    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "EMAIL_TAKEN");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_expired_token_collapses_to_unauthorized() {
    // An expired token and a forged one must be indistinguishable
    let service = av_auth::TokenService::new(b"0123456789abcdef0123456789abcdef", 0);
    let token = service.issue(Uuid::new_v4()).unwrap();
    tokio::time::sleep(std::time::Duration::from_secs(2)).await;

    let auth_error = service.validate(&token).unwrap_err();
    let (status, json) = response_json(ApiError::from(auth_error)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_internal_error_hides_message() {
    let (status, json) = response_json(ApiError::internal("pool exhausted on shard 3")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Internal server error");
}
