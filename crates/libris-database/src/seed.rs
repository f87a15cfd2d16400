//! Sample data seeding for the catalog and plan tables.
//!
//! Seeding is idempotent: if any book already exists the catalog is left
//! untouched. Plans use `ON CONFLICT DO NOTHING` so re-running after a
//! partial seed is safe.

use sqlx::PgPool;
use tracing::info;

use libris_core::error::{AppError, ErrorKind};
use libris_core::result::AppResult;

/// Subscription plans seeded on first run: (name, price, description, max_books).
const PLANS: &[(&str, f64, &str, i32)] = &[
    ("free", 0.0, "Access to basic books", 5),
    ("premium", 9.99, "Access to all books", 100),
    ("unlimited", 19.99, "Unlimited access", 999),
];

/// Sample catalog: (title, author, genre, description, price, is_premium).
const BOOKS: &[(&str, &str, &str, &str, f64, bool)] = &[
    (
        "The Python Guide",
        "John Doe",
        "Programming",
        "Learn Python programming",
        29.99,
        false,
    ),
    (
        "Advanced FastAPI",
        "Jane Smith",
        "Programming",
        "Master FastAPI development",
        39.99,
        true,
    ),
    (
        "Data Science Handbook",
        "Bob Johnson",
        "Data Science",
        "Complete guide to data science",
        49.99,
        true,
    ),
    (
        "Web Development Basics",
        "Alice Brown",
        "Web Development",
        "HTML, CSS, JavaScript fundamentals",
        19.99,
        false,
    ),
    (
        "Machine Learning Primer",
        "Charlie Wilson",
        "AI/ML",
        "Introduction to machine learning",
        34.99,
        true,
    ),
];

/// Seed plans and sample books. Returns false when data already exists.
pub async fn seed_catalog(pool: &PgPool) -> AppResult<bool> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count books", e))?;

    if existing > 0 {
        return Ok(false);
    }

    for (name, price, description, max_books) in PLANS {
        sqlx::query(
            "INSERT INTO subscription_plans (name, price, description, max_books) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(name)
        .bind(price)
        .bind(description)
        .bind(max_books)
        .execute(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to seed plans", e))?;
    }

    for (title, author, genre, description, price, is_premium) in BOOKS {
        sqlx::query(
            "INSERT INTO books (title, author, genre, description, price, is_premium) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(title)
        .bind(author)
        .bind(genre)
        .bind(description)
        .bind(price)
        .bind(is_premium)
        .execute(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to seed books", e))?;
    }

    info!(plans = PLANS.len(), books = BOOKS.len(), "Seeded catalog");
    Ok(true)
}
