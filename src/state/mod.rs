// State management module
// Handles application state and the book registry

pub mod app_state;

pub use app_state::{AppState, Book, BookId};
