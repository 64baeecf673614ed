//! # Rendering Module
//!
//! Turns `CmdResult` data into terminal text. Everything here builds a
//! `String`; printing happens in the handlers. Each renderer takes a
//! `use_color` flag so tests can check plain output.

use bookshelf::index::DisplayBook;
use bookshelf::model::{LibraryStats, ReadStatus};
use colored::{ColoredString, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a title, author or genre may render before being truncated.
pub const FIELD_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CliMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CliMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

pub fn should_color() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

fn paint(text: &str, use_color: bool, style: fn(&str) -> ColoredString) -> String {
    if use_color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn render_messages(messages: &[CliMessage], use_color: bool) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => paint(&message.content, use_color, |s| s.dimmed()),
            MessageLevel::Success => paint(&message.content, use_color, |s| s.green()),
            MessageLevel::Warning => paint(&message.content, use_color, |s| s.yellow()),
        };
        out.push_str(&styled);
        out.push('\n');
    }
    out
}

pub fn render_book_line(db: &DisplayBook, use_color: bool) -> String {
    let book = &db.book;
    let status = match book.read {
        ReadStatus::Yes => paint("Read", use_color, |s| s.green()),
        ReadStatus::No => paint("Unread", use_color, |s| s.red()),
    };

    let title = truncate_to_width(&book.title, FIELD_WIDTH);

    format!(
        "{}. {} by {} ({}) - {} - {}",
        db.index,
        paint(&title, use_color, |s| s.bold()),
        truncate_to_width(&book.author, FIELD_WIDTH),
        book.year,
        truncate_to_width(&book.genre, FIELD_WIDTH),
        status
    )
}

/// Numbered book list, or `empty_message` when there is nothing to show.
pub fn render_book_list(books: &[DisplayBook], empty_message: &str, use_color: bool) -> String {
    if books.is_empty() {
        return render_messages(&[CliMessage::info(empty_message)], use_color);
    }

    let mut out = String::new();
    for db in books {
        out.push_str(&render_book_line(db, use_color));
        out.push('\n');
    }
    out
}

pub fn render_stats(stats: &LibraryStats, use_color: bool) -> String {
    format!(
        "{} {}\n{} {:.2}%\n",
        paint("Total books:", use_color, |s| s.bold()),
        stats.total,
        paint("Percentage read:", use_color, |s| s.bold()),
        stats.read_percentage
    )
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
