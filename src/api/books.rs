//! Book registry API handlers
//!
//! Contains HTTP request handlers for book CRUD operations.

use crate::error::AppError;
use crate::state::{AppState, Book};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// GET /books - List all books
pub async fn list_books(State(state): State<Arc<RwLock<AppState>>>) -> Json<Vec<Book>> {
    let state = state.read().await;
    Json(state.books_list())
}

/// GET /books/:id - Get a specific book
pub async fn get_book(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<Json<Book>, AppError> {
    let state = state.read().await;
    let index = state.find_index(&id).ok_or(AppError::BookNotFound)?;

    Ok(Json(state.get(index).clone()))
}

/// POST /books - Create a new book
///
/// The body is decoded leniently: malformed or absent JSON yields a
/// zero-valued candidate rather than a rejection, and any ID in the body
/// is replaced by the server-assigned one.
pub async fn create_book(State(state): State<Arc<RwLock<AppState>>>, body: Bytes) -> Json<Book> {
    let candidate: Book = serde_json::from_slice(&body).unwrap_or_default();

    let mut state = state.write().await;
    Json(state.add_book(candidate))
}

/// PUT /books/:id - Replace a book's title and author
///
/// The stored ID is taken from the path parameter, never from the body.
/// Body decode failures are tolerated the same way as on create.
pub async fn update_book(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Book>, AppError> {
    // Write lock held across lookup and mutation so the index cannot go
    // stale under a concurrent delete or insert.
    let mut state = state.write().await;
    let index = state.find_index(&id).ok_or(AppError::BookNotFound)?;

    let candidate: Book = serde_json::from_slice(&body).unwrap_or_default();
    Ok(Json(state.replace(index, candidate, &id)))
}

/// DELETE /books/:id - Delete a book
pub async fn delete_book(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut state = state.write().await;
    let index = state.find_index(&id).ok_or(AppError::BookNotFound)?;
    state.remove(index);

    // 200 with an empty body, still under the JSON content type
    Ok(([(header::CONTENT_TYPE, "application/json")], ()))
}
