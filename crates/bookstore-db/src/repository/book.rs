//! # Book Repository
//!
//! Database operations for books.
//!
//! ## Key Operations
//! - Full loads for listing (filtering happens in bookstore-core)
//! - Lookup by id
//! - Stock updates as single-statement deltas

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use bookstore_core::Book;

/// Repository for book database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = BookRepository::new(pool);
///
/// let book = repo.get_by_id(1).await?;
/// let sold = repo.decrement_stock(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookRepository { pool }
    }

    /// Loads every book, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, year, count
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = books.len(), "Loaded books");
        Ok(books)
    }

    /// Lists every book id in ascending order.
    pub async fn list_ids(&self) -> DbResult<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>("SELECT id FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(ids)
    }

    /// Gets a book by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Book))` - Book found
    /// * `Ok(None)` - Book not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, year, count
            FROM books
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Sells one copy.
    ///
    /// ## Stock Guard
    /// ```text
    /// UPDATE books SET count = count - 1 WHERE id = ? AND count > 0
    /// ```
    /// The guard lives in the statement itself, so the count cannot go
    /// negative even if the row changed after it was read.
    ///
    /// ## Returns
    /// * `Ok(true)` - One copy removed
    /// * `Ok(false)` - Book missing or out of stock; nothing changed
    pub async fn decrement_stock(&self, id: i64) -> DbResult<bool> {
        debug!(id = %id, "Decrementing stock");

        let result = sqlx::query(
            r#"
            UPDATE books
            SET count = count - 1
            WHERE id = ?1 AND count > 0
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Adds `amount` copies.
    ///
    /// ## Returns
    /// * `Ok(())` - Stock updated
    /// * `Err(DbError::NotFound)` - Book doesn't exist
    pub async fn add_stock(&self, id: i64, amount: i64) -> DbResult<()> {
        debug!(id = %id, amount = %amount, "Adding stock");

        let result = sqlx::query(
            r#"
            UPDATE books
            SET count = count + ?2
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(amount)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Book", id));
        }

        Ok(())
    }

    /// Counts total books.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
