use super::DataStore;
use crate::error::Result;
use crate::model::Book;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.books = books.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ReadStatus;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_book(mut self, title: &str, author: &str, read: ReadStatus) -> Self {
            self.store
                .books
                .push(Book::new(title, author, 2000, "Fiction", read));
            self
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.books.push(Book::new(
                    format!("Test Book {}", i + 1),
                    format!("Author {}", i + 1),
                    2000 + i as i64,
                    "Fiction",
                    ReadStatus::No,
                ));
            }
            self
        }

        pub fn books(&self) -> Vec<Book> {
            self.store.books.clone()
        }
    }
}
