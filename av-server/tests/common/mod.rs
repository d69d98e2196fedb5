#![allow(dead_code)]

//! Test infrastructure for av-server API tests

use av_auth::TokenService;
use av_core::{Identity, IdentityStore};
use av_db::IdentityRepository;
use av_federation::{FederationClient, IdentityReconciler, ProviderConfig};
use av_server::AppState;

use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-test-secret-test-secret!";

/// Create a test pool with in-memory SQLite and migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../crates/av-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing (no federation)
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let upload_dir = std::env::temp_dir().join(format!("av-test-uploads-{}", Uuid::new_v4()));

    AppState {
        pool,
        token_service: Arc::new(TokenService::new(TEST_JWT_SECRET, 3600)),
        federation: None,
        reconciler: None,
        upload_dir,
    }
}

/// Create AppState whose federation client points at a mock provider
pub async fn create_federated_app_state(provider_base: &str) -> AppState {
    let mut state = create_test_app_state().await;

    let provider = ProviderConfig {
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
        redirect_uri: "http://localhost:8000/api/v1/auth/federated/callback".to_string(),
        authorize_url: format!("{}/authorize", provider_base),
        token_url: format!("{}/token", provider_base),
        userinfo_url: format!("{}/info", provider_base),
        timeout_secs: 5,
    };

    let client = FederationClient::new(provider).expect("Failed to build federation client");
    let store: Arc<dyn IdentityStore> = Arc::new(IdentityRepository::new(state.pool.clone()));

    state.federation = Some(Arc::new(client));
    state.reconciler = Some(Arc::new(IdentityReconciler::new(store)));
    state
}

/// Insert a local identity with a real password hash and return it
pub async fn create_test_identity(
    pool: &SqlitePool,
    email: &str,
    password: &str,
    is_superuser: bool,
) -> Identity {
    let hash = av_auth::hash_password(password).expect("Failed to hash password");
    let mut identity = Identity::new_local(email.to_string(), Some("Test User".to_string()), hash);
    identity.is_superuser = is_superuser;

    IdentityRepository::new(pool.clone())
        .create(&identity)
        .await
        .expect("Failed to insert test identity");

    identity
}

/// Issue a session token for an identity with the test secret
pub fn issue_token(state: &AppState, identity: &Identity) -> String {
    state
        .token_service
        .issue(identity.id)
        .expect("Failed to issue test token")
}
