//! Library entry models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One user-book ownership record.
///
/// At most one entry exists per (user, book) pair; the database enforces
/// this with a unique constraint so concurrent acquisitions cannot both
/// succeed. Entries are never deleted — a plan downgrade leaves them
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LibraryEntry {
    /// Unique entry identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Owned book.
    pub book_id: i64,
    /// Whether the user has marked the book as read.
    pub is_read: bool,
    /// When the book was acquired.
    pub added_at: DateTime<Utc>,
}

/// A book joined with its ownership state, as returned by library listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OwnedBook {
    /// Book identifier.
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
    /// Whether the book is premium.
    pub is_premium: bool,
    /// Read state of this copy.
    pub is_read: bool,
    /// When the book was acquired.
    pub added_at: DateTime<Utc>,
}
