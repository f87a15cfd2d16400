//! Library (user-book ownership) repository implementation.

use sqlx::PgPool;

use libris_core::error::{AppError, ErrorKind};
use libris_core::result::AppResult;
use libris_entity::library::{LibraryEntry, OwnedBook};

/// Repository for per-user library entries.
#[derive(Debug, Clone)]
pub struct LibraryRepository {
    pool: PgPool,
}

impl LibraryRepository {
    /// Create a new library repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the entry for a (user, book) pair, if one exists.
    pub async fn find_entry(&self, user_id: i64, book_id: i64) -> AppResult<Option<LibraryEntry>> {
        sqlx::query_as::<_, LibraryEntry>(
            "SELECT * FROM user_books WHERE user_id = $1 AND book_id = $2",
        )
        .bind(user_id)
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find library entry", e))
    }

    /// Insert a new ownership record with `is_read = false`.
    ///
    /// A duplicate insert for the same pair loses the race at the unique
    /// constraint and surfaces as a conflict, leaving no partial state.
    pub async fn add(&self, user_id: i64, book_id: i64) -> AppResult<LibraryEntry> {
        sqlx::query_as::<_, LibraryEntry>(
            "INSERT INTO user_books (user_id, book_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(book_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("user_books_user_id_book_id_key") =>
            {
                AppError::conflict("Book already in library")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to add book to library", e),
        })
    }

    /// Set the read flag on an entry. Returns false when no entry exists.
    ///
    /// Idempotent: marking an already-read book succeeds again.
    pub async fn mark_read(&self, user_id: i64, book_id: i64) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE user_books SET is_read = TRUE WHERE user_id = $1 AND book_id = $2")
                .bind(user_id)
                .bind(book_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to mark book read", e)
                })?;

        Ok(result.rows_affected() > 0)
    }

    /// List a user's owned books with read-state, in acquisition order.
    pub async fn list_owned(&self, user_id: i64) -> AppResult<Vec<OwnedBook>> {
        sqlx::query_as::<_, OwnedBook>(
            "SELECT b.id, b.title, b.author, b.genre, b.description, b.price, b.is_premium, \
                    ub.is_read, ub.added_at \
             FROM user_books ub \
             JOIN books b ON b.id = ub.book_id \
             WHERE ub.user_id = $1 \
             ORDER BY ub.added_at ASC, ub.id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list owned books", e))
    }
}
