//! Books service
//!
//! Payloads are validated here, before anything reaches the store.

use crate::{
    error::AppResult,
    models::{Book, BookPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> Vec<Book> {
        self.repository.books.list_all()
    }

    pub fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id)
    }

    pub fn create(&self, data: BookPayload) -> AppResult<Book> {
        data.check()?;
        let book = self.repository.books.create(data.into_book());
        tracing::debug!(id = book.id, "Book created");
        Ok(book)
    }

    /// Full replacement of the book at `id`
    pub fn update(&self, id: i64, data: BookPayload) -> AppResult<Book> {
        data.check()?;
        self.repository.books.update(id, data.into_book())
    }

    pub fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id)?;
        tracing::debug!(id, "Book deleted");
        Ok(())
    }

    /// Count stored books (for health)
    pub fn count(&self) -> usize {
        self.repository.books.len()
    }
}
