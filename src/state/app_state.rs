// Application state management
// Contains the book registry and the ID assignment counter

use serde::{Deserialize, Serialize};

/// Unique identifier for a book
pub type BookId = i64;

/// Book structure
/// Represents a single book record, both as stored and as serialized on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    /// Identifier assigned by the registry on creation
    pub id: BookId,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
}

/// Main application state
/// Owns the book registry and the ID counter shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// All books, kept in insertion order
    pub books: Vec<Book>,
    /// Next ID to hand out; only ever moves forward, so IDs freed by
    /// deletion are never reissued
    next_id: BookId,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }
}

impl AppState {
    /// Create a new application state with an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the position of the book whose ID matches `id_text`
    /// Returns None if the text is not an integer or no book matches
    pub fn find_index(&self, id_text: &str) -> Option<usize> {
        let id: BookId = id_text.parse().ok()?;
        self.books.iter().position(|book| book.id == id)
    }

    /// Get all books in insertion order
    pub fn books_list(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Add a book to the registry
    /// Any ID carried by the candidate is discarded in favor of the counter
    /// Returns the stored record with its assigned ID
    pub fn add_book(&mut self, mut candidate: Book) -> Book {
        candidate.id = self.next_id;
        self.next_id += 1;
        self.books.push(candidate.clone());
        candidate
    }

    /// Get the book at a previously validated index
    pub fn get(&self, index: usize) -> &Book {
        &self.books[index]
    }

    /// Replace title and author of the book at `index`, re-deriving the
    /// ID from `id_text` rather than from the candidate
    /// A parse failure is swallowed and leaves the ID at 0
    pub fn replace(&mut self, index: usize, candidate: Book, id_text: &str) -> Book {
        let book = &mut self.books[index];
        book.title = candidate.title;
        book.author = candidate.author;
        book.id = id_text.parse().unwrap_or_default();
        book.clone()
    }

    /// Remove the book at `index`, preserving the relative order of the rest
    pub fn remove(&mut self, index: usize) {
        self.books.remove(index);
    }

    /// Get the number of books in the registry
    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}
