//! Catalog handlers — browse and inspect books.

use axum::Json;
use axum::extract::{Path, Query, State};

use crate::dto::response::BookResponse;
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /books
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = state.catalog_service.list(params.into()).await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// GET /books/{id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = state.catalog_service.get(book_id).await?;

    Ok(Json(BookResponse::from(book)))
}
