//! # `restock`: Add Copies
//!
//! ```text
//! ┌──────────────┬───────────────┬──────────────────────────────────────┐
//! │ --id         │ --count       │ Effect                               │
//! ├──────────────┼───────────────┼──────────────────────────────────────┤
//! │ given        │ given (>= 1)  │ that book += count                   │
//! │ given        │ omitted       │ that book += random 1..=9            │
//! │ omitted      │ (ignored)     │ random book += random 1..=9          │
//! └──────────────┴───────────────┴──────────────────────────────────────┘
//! ```

use bookstore_core::restock::{pick_random_id, random_amount, resolve_amount};
use bookstore_core::validation::{parse_optional_book_id, parse_restock_amount};
use bookstore_core::Book;
use bookstore_db::Database;
use rand::Rng;
use tracing::{debug, info};

use crate::cli::RestockArgs;
use crate::error::{CommandError, CommandResult};

/// Outcome of a restock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restocked {
    /// The book as stored after the restock.
    pub book: Book,

    /// Copies added.
    pub amount: i64,
}

/// Adds copies to a book, choosing the book and/or amount at random when
/// they are omitted.
pub async fn restock_book(
    db: &Database,
    args: &RestockArgs,
    rng: &mut impl Rng,
) -> CommandResult<Restocked> {
    let id = parse_optional_book_id(args.id.as_deref()).map_err(CommandError::InvalidId)?;
    let books = db.books();

    let (book, amount) = match id {
        Some(id) => {
            let explicit =
                parse_restock_amount(args.count.as_deref()).map_err(CommandError::InvalidAmount)?;
            let book = books
                .get_by_id(id)
                .await?
                .ok_or(CommandError::NotFound { id })?;
            (book, resolve_amount(explicit, rng))
        }
        None => {
            if args.count.is_some() {
                debug!("Ignoring --count for a random restock");
            }
            let ids = books.list_ids().await?;
            let id = pick_random_id(&ids, rng).ok_or(CommandError::NoBooksAvailable)?;
            let book = books
                .get_by_id(id)
                .await?
                .ok_or(CommandError::NotFound { id })?;
            (book, random_amount(rng))
        }
    };

    let new_count = book.count_after_restock(amount)?;

    books
        .add_stock(book.id, amount)
        .await
        .map_err(|e| CommandError::from_db(book.id, e))?;

    info!(id = %book.id, amount = %amount, count = %new_count, "Book restocked");

    Ok(Restocked {
        book: Book {
            count: new_count,
            ..book
        },
        amount,
    })
}
