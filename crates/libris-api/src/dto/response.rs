//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use libris_entity::book::Book;
use libris_entity::library::OwnedBook;
use libris_entity::plan::Plan;
use libris_entity::user::User;

/// Public user representation. Never exposes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
    pub subscription_plan: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            subscription_plan: user.subscription_plan,
            created_at: user.created_at,
        }
    }
}

/// Issued session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl TokenResponse {
    pub fn bearer(access_token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_at,
        }
    }
}

/// Catalog book representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub price: f64,
    pub is_premium: bool,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            genre: book.genre,
            description: book.description,
            price: book.price,
            is_premium: book.is_premium,
        }
    }
}

/// A book in the caller's library, with read state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedBookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub price: f64,
    pub is_premium: bool,
    pub is_read: bool,
    pub added_at: DateTime<Utc>,
}

impl From<OwnedBook> for OwnedBookResponse {
    fn from(owned: OwnedBook) -> Self {
        Self {
            id: owned.id,
            title: owned.title,
            author: owned.author,
            genre: owned.genre,
            description: owned.description,
            price: owned.price,
            is_premium: owned.is_premium,
            is_read: owned.is_read,
            added_at: owned.added_at,
        }
    }
}

/// Subscription plan representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub max_books: i32,
}

impl From<Plan> for PlanResponse {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            price: plan.price,
            description: plan.description,
            max_books: plan.max_books,
        }
    }
}

/// Generic message envelope for operations without a richer payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}
