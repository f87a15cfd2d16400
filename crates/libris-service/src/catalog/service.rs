//! Read-only catalog access.

use std::sync::Arc;

use libris_core::error::AppError;
use libris_core::types::pagination::PageRequest;
use libris_database::repositories::book::BookRepository;
use libris_entity::book::Book;

/// Serves the read-only book catalog.
///
/// No server-side filtering; genre/premium filtering is a front-end
/// concern.
#[derive(Debug, Clone)]
pub struct CatalogService {
    /// Book repository.
    book_repo: Arc<BookRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(book_repo: Arc<BookRepository>) -> Self {
        Self { book_repo }
    }

    /// Lists a window of the catalog in stable insertion order.
    pub async fn list(&self, page: PageRequest) -> Result<Vec<Book>, AppError> {
        self.book_repo.find_all(&page).await
    }

    /// Fetches a single book.
    pub async fn get(&self, book_id: i64) -> Result<Book, AppError> {
        self.book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found"))
    }
}
