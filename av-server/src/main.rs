use av_core::IdentityStore;
use av_db::IdentityRepository;
use av_federation::{FederationClient, IdentityReconciler, ProviderConfig};
use av_server::{AppState, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use av_auth::TokenService;
use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = av_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = av_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting av-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .foreign_keys(true)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/av-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Session token service. validate() already required the secret.
    let Some(ref jwt_secret) = config.auth.jwt_secret else {
        unreachable!("validate() ensures auth.jwt_secret is set")
    };
    let token_service = Arc::new(TokenService::new(
        jwt_secret.as_bytes(),
        config.auth.token_ttl_secs,
    ));
    info!(
        "Token service initialized (ttl {}s)",
        config.auth.token_ttl_secs
    );

    // Federated login is optional: it exists only when a client id is
    // configured
    let (federation, reconciler) = if config.oauth.enabled()
        && let (Some(client_id), Some(client_secret), Some(redirect_uri)) = (
            &config.oauth.client_id,
            &config.oauth.client_secret,
            &config.oauth.redirect_uri,
        ) {
        let provider = ProviderConfig {
            client_id: client_id.clone(),
            client_secret: client_secret.clone(),
            redirect_uri: redirect_uri.clone(),
            authorize_url: config.oauth.authorize_url.clone(),
            token_url: config.oauth.token_url.clone(),
            userinfo_url: config.oauth.userinfo_url.clone(),
            timeout_secs: config.oauth.timeout_secs,
        };
        let client = Arc::new(FederationClient::new(provider)?);

        let store: Arc<dyn IdentityStore> = Arc::new(IdentityRepository::new(pool.clone()));
        let reconciler = Arc::new(IdentityReconciler::new(store));

        info!("Federated login enabled");
        (Some(client), Some(reconciler))
    } else {
        info!("Federated login disabled (no oauth client configured)");
        (None, None)
    };

    // Upload directory for audio files
    let upload_dir = config.upload_dir()?;
    std::fs::create_dir_all(&upload_dir)?;
    info!("Upload directory: {}", upload_dir.display());

    // Build application state
    let app_state = AppState {
        pool,
        token_service,
        federation,
        reconciler,
        upload_dir,
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");

    Ok(())
}
