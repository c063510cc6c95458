//! # Inventory Commands
//!
//! The Inventory Command Processor: one function per subcommand, plus the
//! [`Report`] that turns a successful result into output lines.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         One Invocation                                  │
//! │                                                                         │
//! │  Command::Get      ──► list::list_books        ──► Report::Listing     │
//! │  Command::Buy      ──► purchase::purchase_book ──► Report::Bought      │
//! │  Command::Restock  ──► restock::restock_book   ──► Report::Restocked   │
//! │                                                                         │
//! │  Any error         ──► CommandError (its message is the output)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod list;
pub mod purchase;
pub mod restock;

use bookstore_core::Book;
use bookstore_db::Database;
use rand::Rng;

use crate::cli::Command;
use crate::error::CommandResult;

pub use list::list_books;
pub use purchase::purchase_book;
pub use restock::{restock_book, Restocked};

/// Printed when a listing matches nothing.
pub const NO_RESULTS: &str = "No books found matching the criteria.";

/// Successful outcome of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Listing { books: Vec<Book>, json: bool },
    Bought(Book),
    Restocked(Restocked),
}

impl Report {
    /// Renders the report as the text printed on stdout.
    pub fn render(&self) -> CommandResult<String> {
        let text = match self {
            Report::Listing { books, json: true } => serde_json::to_string_pretty(books)?,
            Report::Listing { books, json: false } if books.is_empty() => NO_RESULTS.to_string(),
            Report::Listing { books, json: false } => books
                .iter()
                .map(Book::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
            Report::Bought(book) => format!("Book '{}' bought successfully.", book.title),
            Report::Restocked(done) => {
                format!("Book '{}' restocked successfully.", done.book.title)
            }
        };
        Ok(text)
    }
}

/// Runs one command against the database.
pub async fn dispatch(
    db: &Database,
    command: &Command,
    rng: &mut impl Rng,
) -> CommandResult<Report> {
    match command {
        Command::Get(args) => Ok(Report::Listing {
            books: list_books(db, args).await?,
            json: args.json,
        }),
        Command::Buy(args) => purchase_book(db, args).await.map(Report::Bought),
        Command::Restock(args) => restock_book(db, args, rng).await.map(Report::Restocked),
    }
}
