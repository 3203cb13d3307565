//! Repository layer: in-memory record storage

pub mod books;

use std::sync::Arc;

pub use books::BookStore;

/// Main repository struct holding the shared stores
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<BookStore>,
}

impl Repository {
    /// Create a new repository around the given book store
    pub fn new(books: BookStore) -> Self {
        Self {
            books: Arc::new(books),
        }
    }
}
