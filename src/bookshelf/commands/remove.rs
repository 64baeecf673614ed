use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Book;
use crate::store::DataStore;

/// Remove every book whose title matches `title` case-insensitively.
///
/// Nothing is saved when no book matches; `CmdResult::removed` reports which
/// case happened.
pub fn run<S: DataStore>(store: &mut S, books: &mut Vec<Book>, title: &str) -> Result<CmdResult> {
    let (removed, kept): (Vec<Book>, Vec<Book>) = std::mem::take(books)
        .into_iter()
        .partition(|book| book.title_matches(title));
    *books = kept;

    if removed.is_empty() {
        return Ok(CmdResult::default().with_removed(false));
    }

    store.save(books)?;
    Ok(CmdResult::default()
        .with_removed(true)
        .with_affected_books(removed))
}
