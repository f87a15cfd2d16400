//! Plan registry: listing tiers and switching a user's plan.

use std::sync::Arc;

use tracing::info;

use libris_core::error::AppError;
use libris_database::repositories::plan::PlanRepository;
use libris_database::repositories::user::UserRepository;
use libris_entity::plan::Plan;
use libris_entity::user::User;

/// Enumerates subscription tiers and switches a user's plan.
///
/// Switching is a single-statement update: no proration, no payment
/// step, and no validation against the plan's `max_books` quota.
#[derive(Debug, Clone)]
pub struct SubscriptionService {
    /// Plan repository.
    plan_repo: Arc<PlanRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl SubscriptionService {
    /// Creates a new subscription service.
    pub fn new(plan_repo: Arc<PlanRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            plan_repo,
            user_repo,
        }
    }

    /// Lists all plans.
    pub async fn list_plans(&self) -> Result<Vec<Plan>, AppError> {
        self.plan_repo.find_all().await
    }

    /// Switches the user's plan to the one identified by `plan_id`.
    ///
    /// Returns the plan so the caller can confirm by name. The switch
    /// affects entitlement checks from this moment forward only; books
    /// acquired under the previous plan stay owned.
    pub async fn switch_plan(&self, user: &User, plan_id: i64) -> Result<Plan, AppError> {
        let plan = self
            .plan_repo
            .find_by_id(plan_id)
            .await?
            .ok_or_else(|| AppError::not_found("Subscription plan not found"))?;

        self.user_repo.update_plan(user.id, &plan.name).await?;

        info!(user_id = user.id, plan = %plan.name, "Subscription plan switched");

        Ok(plan)
    }
}
