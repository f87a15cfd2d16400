//! Auth handlers — register, login, me.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use libris_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{TokenResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state.account_service.register(&req.email, &req.password).await?;

    Ok(Json(UserResponse::from(user)))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.account_service.login(&req.email, &req.password).await?;

    Ok(Json(TokenResponse::bearer(
        outcome.access_token,
        outcome.expires_at,
    )))
}

/// GET /me
pub async fn me(user: CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(user.into_inner()))
}
