//! API module
//!
//! Contains HTTP request handlers for the book registry endpoints

pub mod books;
