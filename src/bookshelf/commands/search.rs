use crate::commands::CmdResult;
use crate::index::index_books;
use crate::model::{Book, SearchField};

/// Case-insensitive substring match on one field, in library order.
/// An empty term matches every book.
pub fn run(books: &[Book], term: &str, field: SearchField) -> CmdResult {
    let term_lower = term.to_lowercase();

    let matches = books
        .iter()
        .filter(|book| book.field(field).to_lowercase().contains(&term_lower))
        .cloned();

    CmdResult::default().with_listed_books(index_books(matches))
}
