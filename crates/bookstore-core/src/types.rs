//! # Domain Types
//!
//! The [`Book`] record, the only entity of the inventory.
//!
//! ```text
//! ┌─────────────────────────┐
//! │          Book           │
//! │  ─────────────────────  │
//! │  id     (INTEGER, PK)   │
//! │  title  (TEXT)          │
//! │  author (TEXT)          │
//! │  year   (DATE)          │
//! │  count  (INTEGER >= 0)  │
//! └─────────────────────────┘
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::DATE_FORMAT;

// =============================================================================
// Book
// =============================================================================

/// One title's inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Book {
    /// Stable identity, assigned at creation and never reused.
    pub id: i64,

    pub title: String,

    pub author: String,

    /// Publication date. Only the date portion exists.
    pub year: NaiveDate,

    /// Copies on hand. Never negative.
    pub count: i64,
}

impl Book {
    /// Checks if at least one copy can be sold.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.count > 0
    }

    /// Returns the count after selling one copy.
    ///
    /// ## Returns
    /// * `Ok(count - 1)` - At least one copy on hand
    /// * `Err(CoreError::OutOfStock)` - `count == 0`
    pub fn count_after_purchase(&self) -> CoreResult<i64> {
        if !self.in_stock() {
            return Err(CoreError::OutOfStock { id: self.id });
        }
        Ok(self.count - 1)
    }

    /// Returns the count after adding `amount` copies.
    pub fn count_after_restock(&self, amount: i64) -> CoreResult<i64> {
        self.count
            .checked_add(amount)
            .ok_or(CoreError::StockOverflow {
                id: self.id,
                current: self.count,
                amount,
            })
    }
}

/// Listing line: `id | title | author | yyyy-MM-dd | count`.
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {}",
            self.id,
            self.title,
            self.author,
            self.year.format(DATE_FORMAT),
            self.count
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
