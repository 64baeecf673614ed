use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Book;
use crate::store::DataStore;

/// Append `book` and persist the whole library.
///
/// No validation happens here. If the save fails the book stays in `books`.
pub fn run<S: DataStore>(store: &mut S, books: &mut Vec<Book>, book: Book) -> Result<CmdResult> {
    books.push(book.clone());
    store.save(books)?;
    Ok(CmdResult::default().with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReadStatus;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_to_the_end() {
        let mut fixture = StoreFixture::new().with_books(2);
        let mut books = fixture.books();
        let book = Book::new("Dune", "Herbert", 1965, "Sci-Fi", ReadStatus::Yes);

        let result = run(&mut fixture.store, &mut books, book.clone()).unwrap();

        assert_eq!(books.len(), 3);
        assert_eq!(books.last(), Some(&book));
        assert_eq!(result.affected_books, vec![book]);
    }

    #[test]
    fn persists_after_adding() {
        let mut store = InMemoryStore::new();
        let mut books = Vec::new();
        let book = Book::new("Dune", "Herbert", 1965, "Sci-Fi", ReadStatus::Yes);

        run(&mut store, &mut books, book.clone()).unwrap();

        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().unwrap(), vec![book]);
    }

    #[test]
    fn accepts_degenerate_records() {
        let mut store = InMemoryStore::new();
        let mut books = Vec::new();
        let book = Book::new("", "", -300, "", ReadStatus::No);

        run(&mut store, &mut books, book.clone()).unwrap();

        assert_eq!(store.load().unwrap(), vec![book]);
    }

    #[test]
    fn allows_duplicate_titles() {
        let mut store = InMemoryStore::new();
        let mut books = Vec::new();
        let book = Book::new("Dune", "Herbert", 1965, "Sci-Fi", ReadStatus::Yes);

        run(&mut store, &mut books, book.clone()).unwrap();
        run(&mut store, &mut books, book).unwrap();

        assert_eq!(books.len(), 2);
    }
}
