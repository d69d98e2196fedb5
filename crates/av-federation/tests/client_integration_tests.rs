//! Integration tests for the federation client using wiremock mock server

use av_federation::{FederationClient, FederationError, ProviderConfig, ProviderToken};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

fn provider_config(base: &str) -> ProviderConfig {
    ProviderConfig {
        client_id: "client-123".to_string(),
        client_secret: "secret-456".to_string(),
        redirect_uri: "http://localhost:8000/api/v1/auth/federated/callback".to_string(),
        authorize_url: format!("{}/authorize", base),
        token_url: format!("{}/token", base),
        userinfo_url: format!("{}/info", base),
        timeout_secs: 5,
    }
}

#[test]
fn test_authorize_url_carries_client_and_redirect() {
    let config = provider_config("https://oauth.example.com");
    let client = FederationClient::new(config).unwrap();

    let url = client.authorize_url().unwrap();

    assert!(url.starts_with("https://oauth.example.com/authorize?"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("client_id=client-123"));
    assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8000"));
}

#[tokio::test]
async fn test_exchange_code_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=abc123"))
        .and(body_string_contains("client_id=client-123"))
        .and(body_string_contains("client_secret=secret-456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "provider-token-789",
            "token_type": "bearer",
            "expires_in": 31536000
        })))
        .mount(&mock_server)
        .await;

    let client = FederationClient::new(provider_config(&mock_server.uri())).unwrap();
    let token = client.exchange_code("abc123").await.unwrap();

    assert_eq!(token.access_token, "provider-token-789");
}

#[tokio::test]
async fn test_exchange_code_provider_rejects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Code has expired"
        })))
        .mount(&mock_server)
        .await;

    let client = FederationClient::new(provider_config(&mock_server.uri())).unwrap();
    let result = client.exchange_code("stale-code").await;

    assert!(matches!(result, Err(FederationError::Exchange { .. })));
}

#[tokio::test]
async fn test_exchange_code_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = FederationClient::new(provider_config(&mock_server.uri())).unwrap();
    let result = client.exchange_code("abc123").await;

    assert!(matches!(result, Err(FederationError::Exchange { .. })));
}

#[tokio::test]
async fn test_fetch_profile_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/info"))
        .and(header("Authorization", "OAuth provider-token-789"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1000034426",
            "login": "b.traveller",
            "default_email": "b.traveller@example.com",
            "real_name": "Bilbo Traveller"
        })))
        .mount(&mock_server)
        .await;

    let client = FederationClient::new(provider_config(&mock_server.uri())).unwrap();
    let token = ProviderToken {
        access_token: "provider-token-789".to_string(),
    };
    let profile = client.fetch_profile(&token).await.unwrap();

    assert_eq!(profile.id, "1000034426");
    assert_eq!(profile.email, "b.traveller@example.com");
    assert_eq!(profile.display_name.as_deref(), Some("Bilbo Traveller"));
}

#[tokio::test]
async fn test_fetch_profile_without_email_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1000034426",
            "login": "b.traveller"
        })))
        .mount(&mock_server)
        .await;

    let client = FederationClient::new(provider_config(&mock_server.uri())).unwrap();
    let token = ProviderToken {
        access_token: "provider-token-789".to_string(),
    };
    let result = client.fetch_profile(&token).await;

    assert!(matches!(result, Err(FederationError::Profile { .. })));
}

#[tokio::test]
async fn test_fetch_profile_provider_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "unauthorized"
        })))
        .mount(&mock_server)
        .await;

    let client = FederationClient::new(provider_config(&mock_server.uri())).unwrap();
    let token = ProviderToken {
        access_token: "revoked".to_string(),
    };
    let result = client.fetch_profile(&token).await;

    assert!(matches!(result, Err(FederationError::Profile { .. })));
}
