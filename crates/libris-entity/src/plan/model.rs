//! Subscription plan entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A subscription tier. Static reference data seeded once.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Plan {
    /// Unique plan identifier.
    pub id: i64,
    /// Unique plan name ("free", "premium", "unlimited").
    pub name: String,
    /// Monthly price.
    pub price: f64,
    /// Marketing description.
    pub description: String,
    /// Declared library size quota. Stored but not enforced anywhere.
    pub max_books: i32,
}
