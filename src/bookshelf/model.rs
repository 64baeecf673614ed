use crate::error::ShelfError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a book has been read. Stored on disk as `"yes"` / `"no"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadStatus {
    Yes,
    #[default]
    No,
}

impl ReadStatus {
    pub fn is_read(self) -> bool {
        matches!(self, ReadStatus::Yes)
    }
}

impl From<bool> for ReadStatus {
    fn from(read: bool) -> Self {
        if read {
            ReadStatus::Yes
        } else {
            ReadStatus::No
        }
    }
}

/// One catalog entry. The title is the (case-insensitive) identity key, but
/// nothing enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBook")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i64,
    pub genre: String,
    pub read: ReadStatus,
}

/// On-disk shape accepted when reading. Files written by older versions name
/// the genre `generation`; some carry both keys, and `genre` wins then.
#[derive(Deserialize)]
struct RawBook {
    title: String,
    author: String,
    year: i64,
    #[serde(default)]
    genre: Option<String>,
    #[serde(default)]
    generation: Option<String>,
    read: ReadStatus,
}

impl TryFrom<RawBook> for Book {
    type Error = String;

    fn try_from(raw: RawBook) -> Result<Self, Self::Error> {
        let genre = raw
            .genre
            .or(raw.generation)
            .ok_or_else(|| "missing field `genre`".to_string())?;
        Ok(Book {
            title: raw.title,
            author: raw.author,
            year: raw.year,
            genre,
            read: raw.read,
        })
    }
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        genre: impl Into<String>,
        read: ReadStatus,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        }
    }

    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Author => &self.author,
        }
    }
}

/// Which text field a search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
}

impl FromStr for SearchField {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            other => Err(ShelfError::Api(format!("Unknown search field: {}", other))),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
    /// 0.0 for an empty library. Not rounded.
    pub read_percentage: f64,
}
