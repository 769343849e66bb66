//! End-to-end walk of the book registry API
//!
//! Drives the handlers through the library crate against a fresh
//! in-memory store, covering the full CRUD lifecycle.

use axum::body::{to_bytes, Bytes};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use book_registry_backend::api::books;
use book_registry_backend::state::AppState;
use std::sync::Arc;
use tokio::sync::RwLock;

fn fresh_state() -> Arc<RwLock<AppState>> {
    Arc::new(RwLock::new(AppState::new()))
}

#[tokio::test]
async fn test_registry_starts_empty() {
    let state = fresh_state();
    let Json(books) = books::list_books(State(state)).await;
    assert!(books.is_empty());
}

#[tokio::test]
async fn test_first_creation_scenario() {
    let state = fresh_state();

    let Json(created) = books::create_book(
        State(state.clone()),
        Bytes::from(r#"{"title":"Go 101","author":"Mori"}"#),
    )
    .await;
    assert_eq!(created.id, 1);
    assert_eq!(created.title, "Go 101");
    assert_eq!(created.author, "Mori");

    let Json(all) = books::list_books(State(state)).await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], created);
}

#[tokio::test]
async fn test_full_crud_lifecycle() {
    let state = fresh_state();

    // Create three books; IDs are handed out sequentially
    for (i, body) in [
        r#"{"title":"A","author":"a"}"#,
        r#"{"title":"B","author":"b"}"#,
        r#"{"title":"C","author":"c"}"#,
    ]
    .into_iter()
    .enumerate()
    {
        let Json(created) = books::create_book(State(state.clone()), Bytes::from(body)).await;
        assert_eq!(created.id, (i + 1) as i64);
    }

    // Replace the second book; the stored ID stays the path ID even
    // though the body claims another one
    let Json(updated) = books::update_book(
        State(state.clone()),
        Path("2".to_string()),
        Bytes::from(r#"{"id":77,"title":"B2","author":"b2"}"#),
    )
    .await
    .unwrap();
    assert_eq!(updated.id, 2);
    assert_eq!(updated.title, "B2");

    // Delete the first book and check what remains, in order
    let response = books::delete_book(State(state.clone()), Path("1".to_string()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());

    let Json(remaining) = books::list_books(State(state.clone())).await;
    let ids: Vec<_> = remaining.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![2, 3]);

    // The deleted ID no longer resolves
    let result = books::get_book(State(state.clone()), Path("1".to_string())).await;
    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"No book found with given ID");

    // A new creation never reuses a freed ID
    let Json(fourth) = books::create_book(
        State(state),
        Bytes::from(r#"{"title":"D","author":"d"}"#),
    )
    .await;
    assert_eq!(fourth.id, 4);
}
