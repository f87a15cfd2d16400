//! Subscription handlers — plan listing and switching.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::response::{MessageResponse, PlanResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /subscription-plans
pub async fn list_plans(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanResponse>>, ApiError> {
    let plans = state.subscription_service.list_plans().await?;

    Ok(Json(plans.into_iter().map(PlanResponse::from).collect()))
}

/// POST /subscribe/{plan_id}
pub async fn subscribe(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(plan_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let plan = state.subscription_service.switch_plan(&user, plan_id).await?;

    Ok(Json(MessageResponse::new(format!(
        "Successfully subscribed to {} plan",
        plan.name
    ))))
}
