//! Book entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog item. Immutable after seeding; read-only to users.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    /// Unique book identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Genre label.
    pub genre: String,
    /// Short description.
    pub description: String,
    /// List price.
    pub price: f64,
    /// Whether acquiring this book requires a paid plan.
    pub is_premium: bool,
}
