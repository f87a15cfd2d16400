//! Library handlers — acquisition, reading state, owned books.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::response::{MessageResponse, OwnedBookResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /books/{id}/add-to-library
pub async fn add_to_library(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(book_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.library_service.acquire(&user, book_id).await?;

    Ok(Json(MessageResponse::new("Book added to library")))
}

/// GET /my-books
pub async fn my_books(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<OwnedBookResponse>>, ApiError> {
    let owned = state.library_service.list_owned(&user).await?;

    Ok(Json(
        owned.into_iter().map(OwnedBookResponse::from).collect(),
    ))
}

/// POST /books/{id}/mark-read
pub async fn mark_read(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(book_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.library_service.mark_read(&user, book_id).await?;

    Ok(Json(MessageResponse::new("Book marked as read")))
}
