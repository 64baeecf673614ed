//! # API Facade
//!
//! `LibraryApi` is the single entry point for a session. It loads the library
//! once when opened, keeps it in memory, and hands the in-memory list plus the
//! store to the command functions.
//!
//! The facade does no business logic and produces no text. Every method
//! returns a [`CmdResult`] the UI turns into output.
//!
//! ## Generic Over DataStore
//!
//! - Production: `LibraryApi<FileStore>`
//! - Testing: `LibraryApi<InMemoryStore>`
//!
//! ## Persistence
//!
//! Each mutation writes the full library through the store before returning.
//! A failed write is returned as an error, but the in-memory list keeps the
//! change: memory and disk may disagree until the next successful write.

use crate::commands;
use crate::error::Result;
use crate::model::{Book, ReadStatus, SearchField};
use crate::store::DataStore;
use tracing::debug;

pub struct LibraryApi<S: DataStore> {
    store: S,
    books: Vec<Book>,
}

impl<S: DataStore> LibraryApi<S> {
    /// Load the library from `store` and start a session over it.
    pub fn open(store: S) -> Result<Self> {
        let books = store.load()?;
        debug!(count = books.len(), "library opened");
        Ok(Self { store, books })
    }

    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        genre: impl Into<String>,
        read: ReadStatus,
    ) -> Result<CmdResult> {
        let book = Book::new(title, author, year, genre, read);
        debug!(title = %book.title, "adding book");
        commands::add::run(&mut self.store, &mut self.books, book)
    }

    pub fn remove_book(&mut self, title: &str) -> Result<CmdResult> {
        let result = commands::remove::run(&mut self.store, &mut self.books, title)?;
        debug!(title, removed = result.affected_books.len(), "remove requested");
        Ok(result)
    }

    pub fn search_books(&self, term: &str, field: SearchField) -> CmdResult {
        commands::search::run(&self.books, term, field)
    }

    pub fn list_books(&self) -> CmdResult {
        commands::list::run(&self.books)
    }

    pub fn statistics(&self) -> CmdResult {
        commands::stats::run(&self.books)
    }

    /// The current in-memory snapshot.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::CmdResult;
