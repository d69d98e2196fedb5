use crate::{
    AppState, delete_identity, federated_callback, federated_login, health, list_files, login, me,
    refresh, register, update_me, upload_file,
};

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Sessions
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/refresh", post(refresh))
        // Federated login
        .route("/api/v1/auth/federated/login", get(federated_login))
        .route("/api/v1/auth/federated/callback", get(federated_callback))
        // Identities
        .route("/api/v1/identities", post(register))
        .route("/api/v1/identities/me", get(me).patch(update_me))
        .route("/api/v1/identities/{id}", delete(delete_identity))
        // Audio files
        .route("/api/v1/files", post(upload_file).get(list_files))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
