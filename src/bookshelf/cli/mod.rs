//! # CLI Behavior
//!
//! This is **one possible UI client** for bookshelf, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! It is also where input is validated: the library accepts any record, so
//! empty titles, authors or genres and negative years are rejected here,
//! before the API is called.
//!
//! ### Naked Execution (`bookshelf`)
//!
//! Running `bookshelf` with no arguments defaults to `bookshelf list`.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Per-command handlers that call the API and print results
//! - `render`: Output formatting (book lines, statistics, messages)

mod commands;
mod render;
pub mod setup;

pub use commands::run;
