//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error types
///
/// Each variant implements automatic conversion to an HTTP response via
/// `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// No book matches the requested ID, or the ID failed to parse
    #[error("No book found with given ID")]
    BookNotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Lookup misses answer 400 (not 404) with a fixed text body that
            // clients match on, served under the JSON content type every
            // endpoint sets.
            AppError::BookNotFound => (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                self.to_string(),
            )
                .into_response(),
        }
    }
}
