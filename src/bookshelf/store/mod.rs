//! # Storage Layer
//!
//! The [`DataStore`] trait is the only thing the rest of the crate knows about
//! persistence: load the whole book list, save the whole book list.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One JSON file holding an array of book records
//!   - Written atomically (temp file + rename) on every save
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts saves so tests can assert when nothing was written
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "title": "Dune", "author": "Herbert", "year": 1965, "genre": "Sci-Fi", "read": "yes" }
//! ]
//! ```
//!
//! The top level is a plain array in insertion order. There is no wrapper
//! object and no schema version.

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

/// Abstract interface for library persistence.
///
/// Both operations work on the full record list; there is no partial update.
pub trait DataStore {
    /// Load all books in stored order.
    ///
    /// A missing or unparseable resource yields an empty list, not an error.
    fn load(&self) -> Result<Vec<Book>>;

    /// Replace the stored books with `books`.
    fn save(&mut self, books: &[Book]) -> Result<()>;
}
