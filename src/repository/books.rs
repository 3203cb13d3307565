//! In-memory book store.
//!
//! All records live in one map behind a reader/writer lock. Reads share
//! the lock; every mutation takes it exclusively, so writes are serialized
//! against each other and against reads. The lock is never held across an
//! `.await`.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// Thread-safe custodian of all books and sole authority for ids.
#[derive(Debug)]
pub struct BookStore {
    shelf: RwLock<Shelf>,
}

#[derive(Debug)]
struct Shelf {
    books: HashMap<i64, Book>,
    /// Strictly greater than every id ever handed out.
    next_id: i64,
}

fn not_found() -> AppError {
    AppError::NotFound("Book not found".to_string())
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore {
    /// Creates an empty store; the first id assigned is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shelf: RwLock::new(Shelf {
                books: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a store holding the three demonstration books (ids 1-3).
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_books(vec![
            Book {
                id: 1,
                title: "Go Programming".to_string(),
                author: "John Doe".to_string(),
                published_year: 2020,
            },
            Book {
                id: 2,
                title: "Web Development with React".to_string(),
                author: "Jane Smith".to_string(),
                published_year: 2021,
            },
            Book {
                id: 3,
                title: "Clean Code".to_string(),
                author: "Robert C. Martin".to_string(),
                published_year: 2008,
            },
        ])
    }

    /// Creates a store with pre-existing records, keeping their ids.
    ///
    /// The counter starts just past the largest id given.
    #[must_use]
    pub fn with_books(books: Vec<Book>) -> Self {
        let store = Self::new();
        {
            let mut shelf = store.shelf.write();
            for book in books {
                if book.id >= shelf.next_id {
                    shelf.next_id = book.id + 1;
                }
                shelf.books.insert(book.id, book);
            }
        }
        store
    }

    /// Every stored book, in no particular order.
    pub fn list_all(&self) -> Vec<Book> {
        self.shelf.read().books.values().cloned().collect()
    }

    pub fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.shelf.read().books.get(&id).cloned().ok_or_else(not_found)
    }

    /// Stores `candidate` under the next id, ignoring whatever id it carries.
    pub fn create(&self, mut candidate: Book) -> Book {
        let mut shelf = self.shelf.write();
        candidate.id = shelf.next_id;
        shelf.next_id += 1;
        shelf.books.insert(candidate.id, candidate.clone());
        candidate
    }

    /// Replaces the whole record at `id`; nothing is merged.
    pub fn update(&self, id: i64, mut candidate: Book) -> AppResult<Book> {
        let mut shelf = self.shelf.write();
        let slot = shelf.books.get_mut(&id).ok_or_else(not_found)?;
        candidate.id = id;
        *slot = candidate.clone();
        Ok(candidate)
    }

    pub fn delete(&self, id: i64) -> AppResult<()> {
        self.shelf
            .write()
            .books
            .remove(&id)
            .map(|_| ())
            .ok_or_else(not_found)
    }

    /// Number of stored books.
    pub fn len(&self) -> usize {
        self.shelf.read().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
