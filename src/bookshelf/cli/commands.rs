//! Per-command handlers: validate input, call the API, print the result.

use super::render::{
    render_book_list, render_messages, render_stats, should_color, CliMessage,
};
use super::setup::{Cli, Commands};
use bookshelf::api::LibraryApi;
use bookshelf::error::{Result, ShelfError};
use bookshelf::init::initialize;
use bookshelf::logging;
use bookshelf::model::{ReadStatus, SearchField};
use bookshelf::store::fs::FileStore;
use clap::Parser;

struct AppContext {
    api: LibraryApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = AppContext {
        api: initialize(cli.file.clone())?.api,
    };

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        }) => handle_add(&mut ctx, title, author, year, genre, read),
        Some(Commands::Remove { title }) => handle_remove(&mut ctx, title.join(" ")),
        Some(Commands::Search { by, term }) => handle_search(&ctx, by, term.join(" ")),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Stats) => handle_stats(&ctx),
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShelfError::Api(format!("{} cannot be empty", field)));
    }
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    author: String,
    year: u32,
    genre: String,
    read: bool,
) -> Result<()> {
    require("Title", &title)?;
    require("Author", &author)?;
    require("Genre", &genre)?;

    let result = ctx.api.add_book(
        title.trim(),
        author.trim(),
        i64::from(year),
        genre.trim(),
        ReadStatus::from(read),
    )?;

    let messages: Vec<CliMessage> = result
        .affected_books
        .iter()
        .map(|book| CliMessage::success(format!("'{}' added successfully!", book.title)))
        .collect();
    print!("{}", render_messages(&messages, should_color()));
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, title: String) -> Result<()> {
    let result = ctx.api.remove_book(&title)?;
    let message = if result.removed {
        CliMessage::success(format!("'{}' removed successfully!", title))
    } else {
        CliMessage::warning("Book not found.")
    };
    print!("{}", render_messages(&[message], should_color()));
    Ok(())
}

fn handle_search(ctx: &AppContext, field: SearchField, term: String) -> Result<()> {
    let result = ctx.api.search_books(&term, field);

    if result.listed_books.is_empty() {
        let warning = CliMessage::warning("No matching books found.");
        print!("{}", render_messages(&[warning], should_color()));
        return Ok(());
    }

    print!(
        "{}",
        render_book_list(&result.listed_books, "", should_color())
    );
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_books();
    print!(
        "{}",
        render_book_list(&result.listed_books, "Your library is empty.", should_color())
    );
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    if let Some(stats) = ctx.api.statistics().stats {
        print!("{}", render_stats(&stats, should_color()));
    }
    Ok(())
}
