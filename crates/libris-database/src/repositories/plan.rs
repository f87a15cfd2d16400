//! Subscription plan repository implementation.

use sqlx::PgPool;

use libris_core::error::{AppError, ErrorKind};
use libris_core::result::AppResult;
use libris_entity::plan::Plan;

/// Repository for subscription plan reference data.
#[derive(Debug, Clone)]
pub struct PlanRepository {
    pool: PgPool,
}

impl PlanRepository {
    /// Create a new plan repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a plan by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Plan>> {
        sqlx::query_as::<_, Plan>("SELECT * FROM subscription_plans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find plan by id", e))
    }

    /// List all plans in id order.
    pub async fn find_all(&self) -> AppResult<Vec<Plan>> {
        sqlx::query_as::<_, Plan>("SELECT * FROM subscription_plans ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list plans", e))
    }
}
