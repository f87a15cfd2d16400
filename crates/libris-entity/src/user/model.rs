//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::plan::PlanTier;

/// A registered reader account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Unique login email.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the account is active. Stored but not consulted at login.
    pub is_active: bool,
    /// Name of the user's current subscription plan.
    pub subscription_plan: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether the user is currently on the free tier.
    ///
    /// Entitlement decisions compare against the plan held at the moment
    /// of the call; there is no memory of earlier plans.
    pub fn is_free_tier(&self) -> bool {
        self.subscription_plan
            .eq_ignore_ascii_case(PlanTier::Free.as_str())
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Initial subscription plan name.
    pub subscription_plan: String,
}
