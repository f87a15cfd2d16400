//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use libris_auth::jwt::{TokenDecoder, TokenEncoder};
use libris_auth::password::PasswordHasher;
use libris_core::config::AppConfig;

use libris_database::repositories::book::BookRepository;
use libris_database::repositories::library::LibraryRepository;
use libris_database::repositories::plan::PlanRepository;
use libris_database::repositories::user::UserRepository;

use libris_service::account::AccountService;
use libris_service::catalog::CatalogService;
use libris_service::library::LibraryService;
use libris_service::subscription::SubscriptionService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Feature flags loaded at startup.
    pub feature_flags: Arc<serde_json::Value>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder.
    pub token_encoder: Arc<TokenEncoder>,
    /// JWT token decoder and validator.
    pub token_decoder: Arc<TokenDecoder>,
    /// Password hasher (Argon2).
    pub password_hasher: Arc<PasswordHasher>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Book repository.
    pub book_repo: Arc<BookRepository>,
    /// Plan repository.
    pub plan_repo: Arc<PlanRepository>,
    /// Library repository.
    pub library_repo: Arc<LibraryRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Account service (register, login).
    pub account_service: Arc<AccountService>,
    /// Catalog service.
    pub catalog_service: Arc<CatalogService>,
    /// Library entitlement service.
    pub library_service: Arc<LibraryService>,
    /// Subscription plan service.
    pub subscription_service: Arc<SubscriptionService>,
}
