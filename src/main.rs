//! Libris Server — Book Subscription Service
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use libris_core::config::AppConfig;
use libris_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("LIBRIS_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Libris v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = libris_database::DatabasePool::connect(&config.database).await?;
    libris_database::migration::run_migrations(db.pool()).await?;
    let db_pool = db.into_pool();

    // ── Step 2: Feature flags ────────────────────────────────────
    let feature_flags = Arc::new(config.features.load_flags()?);

    // ── Step 3: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(libris_database::repositories::UserRepository::new(
        db_pool.clone(),
    ));
    let book_repo = Arc::new(libris_database::repositories::BookRepository::new(
        db_pool.clone(),
    ));
    let plan_repo = Arc::new(libris_database::repositories::PlanRepository::new(
        db_pool.clone(),
    ));
    let library_repo = Arc::new(libris_database::repositories::LibraryRepository::new(
        db_pool.clone(),
    ));

    // ── Step 4: Auth primitives ──────────────────────────────────
    let password_hasher = Arc::new(libris_auth::PasswordHasher::new());
    let token_encoder = Arc::new(libris_auth::TokenEncoder::new(&config.auth));
    let token_decoder = Arc::new(libris_auth::TokenDecoder::new(&config.auth));

    // ── Step 5: Services ─────────────────────────────────────────
    let account_service = Arc::new(libris_service::AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&token_encoder),
    ));
    let catalog_service = Arc::new(libris_service::CatalogService::new(Arc::clone(&book_repo)));
    let library_service = Arc::new(libris_service::LibraryService::new(
        Arc::clone(&book_repo),
        Arc::clone(&library_repo),
    ));
    let subscription_service = Arc::new(libris_service::SubscriptionService::new(
        Arc::clone(&plan_repo),
        Arc::clone(&user_repo),
    ));

    // ── Step 6: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = libris_api::AppState {
        config: Arc::new(config),
        feature_flags,
        db_pool,
        token_encoder,
        token_decoder,
        password_hasher,
        user_repo,
        book_repo,
        plan_repo,
        library_repo,
        account_service,
        catalog_service,
        library_service,
        subscription_service,
    };

    let app = libris_api::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Libris server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Libris server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
