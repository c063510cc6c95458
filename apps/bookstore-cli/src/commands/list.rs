//! # `get`: List Books
//!
//! ```text
//! raw flags ──► ListQuery::parse ──► list_all() ──► ListQuery::apply ──► Report
//!                    │
//!                    └── bad date / order-by: stop here, nothing is loaded
//! ```

use std::time::Instant;

use bookstore_core::{Book, ListQuery};
use bookstore_db::Database;
use tracing::debug;

use crate::cli::GetArgs;
use crate::error::{CommandError, CommandResult};

/// Validates the filters, loads every book and applies them.
pub async fn list_books(db: &Database, args: &GetArgs) -> CommandResult<Vec<Book>> {
    let start = Instant::now();

    let query = ListQuery::parse(
        args.title.as_deref(),
        args.author.as_deref(),
        args.date.as_deref(),
        args.order_by.as_deref(),
    )
    .map_err(CommandError::from_list_validation)?;

    let books = query.apply(db.books().list_all().await?);

    debug!(
        matched = books.len(),
        order_by = ?query.order_by,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Listing complete"
    );

    Ok(books)
}
