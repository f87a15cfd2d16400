//! Route definitions for the Libris HTTP API.
//!
//! Routes are mounted at the root (no `/api` prefix) and organized by
//! domain. The router receives `AppState` and passes it to all handlers
//! via Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);

    Router::new()
        .merge(auth_routes())
        .merge(catalog_routes())
        .merge(library_routes())
        .merge(subscription_routes())
        .merge(meta_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Account endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/me", get(handlers::auth::me))
}

/// Catalog browsing
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(handlers::book::list_books))
        .route("/books/{id}", get(handlers::book::get_book))
}

/// Per-user library: acquisition and read state
fn library_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/books/{id}/add-to-library",
            post(handlers::library::add_to_library),
        )
        .route("/books/{id}/mark-read", post(handlers::library::mark_read))
        .route("/my-books", get(handlers::library::my_books))
}

/// Subscription plans
fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/subscription-plans",
            get(handlers::subscription::list_plans),
        )
        .route(
            "/subscribe/{plan_id}",
            post(handlers::subscription::subscribe),
        )
}

/// Landing page, health, feature flags, seeding
fn meta_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::meta::root))
        .route("/health", get(handlers::health::health_check))
        .route("/feature-flags", get(handlers::meta::feature_flags))
        .route("/seed-data", post(handlers::meta::seed_data))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(AllowOrigin::any());
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = cors_config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors.max_age(Duration::from_secs(cors_config.max_age_seconds))
}
