//! # `buy`: Sell One Copy

use bookstore_core::validation::parse_book_id;
use bookstore_core::Book;
use bookstore_db::Database;
use tracing::{info, warn};

use crate::cli::BuyArgs;
use crate::error::{CommandError, CommandResult};

/// Sells one copy of the book given by `--id`.
///
/// ## Returns
/// The book as stored after the sale.
///
/// ## Errors
/// * `InvalidId` - `--id` missing, not an integer, or not positive
/// * `NotFound` - no book with that id
/// * `OutOfStock` - `count == 0`; nothing is written
pub async fn purchase_book(db: &Database, args: &BuyArgs) -> CommandResult<Book> {
    let id = parse_book_id(args.id.as_deref()).map_err(CommandError::InvalidId)?;

    let books = db.books();
    let book = books
        .get_by_id(id)
        .await?
        .ok_or(CommandError::NotFound { id })?;

    let remaining = book.count_after_purchase()?;

    // The UPDATE re-checks `count > 0`; losing that check means the copy is gone.
    if !books.decrement_stock(id).await? {
        warn!(id = %id, "Stock ran out before the sale was written");
        return Err(CommandError::OutOfStock { id });
    }

    info!(id = %id, remaining = %remaining, "Book purchased");

    Ok(Book {
        count: remaining,
        ..book
    })
}
