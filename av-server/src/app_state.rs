use av_auth::TokenService;
use av_federation::{FederationClient, IdentityReconciler};

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for all request handlers.
///
/// `federation` and `reconciler` are `None` when no OAuth client is
/// configured; the federated login routes answer 404 in that case.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_service: Arc<TokenService>,
    pub federation: Option<Arc<FederationClient>>,
    pub reconciler: Option<Arc<IdentityReconciler>>,
    pub upload_dir: PathBuf,
}
