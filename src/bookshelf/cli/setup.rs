use bookshelf::model::SearchField;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf", version)]
#[command(about = "Personal library catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Library file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Title of the book
        title: String,

        /// Author's name
        #[arg(short, long)]
        author: String,

        /// Publication year
        #[arg(short, long)]
        year: u32,

        /// Genre
        #[arg(short, long)]
        genre: String,

        /// Mark the book as already read
        #[arg(long)]
        read: bool,
    },

    /// Remove every book with the given title (case-insensitive)
    #[command(alias = "rm", display_order = 2)]
    Remove {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Search books by title or author
    #[command(alias = "s", display_order = 3)]
    Search {
        /// Field to search: title or author
        #[arg(short, long, value_parser = SearchField::from_str, default_value_t = SearchField::Title)]
        by: SearchField,

        /// Search term (words joined with spaces; empty matches everything)
        #[arg(num_args = 0..)]
        term: Vec<String>,
    },

    /// List all books
    #[command(alias = "ls", display_order = 4)]
    List,

    /// Show library statistics
    #[command(display_order = 5)]
    Stats,
}
