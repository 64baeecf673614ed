//! # Display Indexing
//!
//! Listings are numbered from 1 in the order they are shown. The number is a
//! presentation aid only: it is recomputed for every listing, so a book's
//! number in a search result is its position among the matches, not in the
//! whole library.

use crate::model::Book;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBook {
    pub index: usize,
    pub book: Book,
}

pub fn index_books<I>(books: I) -> Vec<DisplayBook>
where
    I: IntoIterator<Item = Book>,
{
    books
        .into_iter()
        .enumerate()
        .map(|(i, book)| DisplayBook {
            index: i + 1,
            book,
        })
        .collect()
}
