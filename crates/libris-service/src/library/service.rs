//! Entitlement engine: acquisition, read-state, and library listing.

use std::sync::Arc;

use tracing::info;

use libris_core::error::AppError;
use libris_database::repositories::book::BookRepository;
use libris_database::repositories::library::LibraryRepository;
use libris_entity::library::{LibraryEntry, OwnedBook};
use libris_entity::user::User;

/// Decides whether a user may acquire a book and tracks ownership.
///
/// Entitlement is evaluated strictly at acquisition time against the
/// user's plan at the moment of the call. Ownership is never revoked:
/// a downgrade to the free tier leaves previously acquired premium
/// books owned, listed, and readable.
#[derive(Debug, Clone)]
pub struct LibraryService {
    /// Book repository.
    book_repo: Arc<BookRepository>,
    /// Library repository.
    library_repo: Arc<LibraryRepository>,
}

impl LibraryService {
    /// Creates a new library service.
    pub fn new(book_repo: Arc<BookRepository>, library_repo: Arc<LibraryRepository>) -> Self {
        Self {
            book_repo,
            library_repo,
        }
    }

    /// Acquires a book into the user's library.
    ///
    /// Failure order: missing book, already owned, entitlement. The final
    /// insert re-checks ownership through the unique constraint, so two
    /// concurrent acquisitions for the same pair cannot both succeed and
    /// the loser leaves no row behind.
    pub async fn acquire(&self, user: &User, book_id: i64) -> Result<LibraryEntry, AppError> {
        let book = self
            .book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found"))?;

        if self
            .library_repo
            .find_entry(user.id, book_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Book already in library"));
        }

        if book.is_premium && user.is_free_tier() {
            return Err(AppError::authorization("Premium subscription required"));
        }

        let entry = self.library_repo.add(user.id, book_id).await?;

        info!(user_id = user.id, book_id, "Book added to library");

        Ok(entry)
    }

    /// Marks an owned book as read. Idempotent if already read.
    pub async fn mark_read(&self, user: &User, book_id: i64) -> Result<(), AppError> {
        let updated = self.library_repo.mark_read(user.id, book_id).await?;
        if !updated {
            return Err(AppError::not_found("Book not in your library"));
        }
        Ok(())
    }

    /// Lists the user's owned books in acquisition order.
    pub async fn list_owned(&self, user: &User) -> Result<Vec<OwnedBook>, AppError> {
        self.library_repo.list_owned(user.id).await
    }
}
