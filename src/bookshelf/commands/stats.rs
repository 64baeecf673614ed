use crate::commands::CmdResult;
use crate::model::{Book, LibraryStats};

pub fn compute(books: &[Book]) -> LibraryStats {
    let total = books.len();
    let read = books.iter().filter(|b| b.read.is_read()).count();
    let read_percentage = if total == 0 {
        0.0
    } else {
        read as f64 / total as f64 * 100.0
    };

    LibraryStats {
        total,
        read,
        read_percentage,
    }
}

pub fn run(books: &[Book]) -> CmdResult {
    CmdResult::default().with_stats(compute(books))
}
