use crate::index::DisplayBook;
use crate::model::{Book, LibraryStats};

pub mod add;
pub mod list;
pub mod remove;
pub mod search;
pub mod stats;

/// Structured outcome of a command. Carries data only; turning it into
/// user-facing text is the caller's job.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books created or removed by the command.
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<DisplayBook>,
    /// Set by `remove`: whether at least one book matched.
    pub removed: bool,
    pub stats: Option<LibraryStats>,
}

impl CmdResult {
    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_removed(mut self, removed: bool) -> Self {
        self.removed = removed;
        self
    }

    pub fn with_stats(mut self, stats: LibraryStats) -> Self {
        self.stats = Some(stats);
        self
    }
}
