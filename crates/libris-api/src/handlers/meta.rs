//! Service metadata handlers — landing message, feature flags, seeding.

use axum::Json;
use axum::extract::State;

use libris_database::seed::seed_catalog;

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Libris book subscription service"))
}

/// GET /feature-flags
pub async fn feature_flags(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.feature_flags.as_ref().clone())
}

/// POST /seed-data
///
/// Idempotent: inserts the default plans and catalog only when the
/// tables are empty.
pub async fn seed_data(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    let seeded = seed_catalog(&state.db_pool).await?;

    let message = if seeded {
        "Seed data created"
    } else {
        "Seed data already present"
    };

    Ok(Json(MessageResponse::new(message)))
}
