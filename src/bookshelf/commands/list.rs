use crate::commands::CmdResult;
use crate::index::index_books;
use crate::model::Book;

pub fn run(books: &[Book]) -> CmdResult {
    CmdResult::default().with_listed_books(index_books(books.iter().cloned()))
}
