//! # Command Errors
//!
//! Every failure of a command ends the invocation with one message. The
//! `Display` text of [`CommandError`] *is* that message.
//!
//! ## Error Kinds
//! ```text
//! ┌──────────────────────┬──────────────────────────────────────────────┐
//! │ Kind                 │ Variants                                     │
//! ├──────────────────────┼──────────────────────────────────────────────┤
//! │ MalformedInput       │ InvalidId, InvalidAmount, InvalidDate        │
//! │ InvalidEnumValue     │ InvalidOrderBy                               │
//! │ NotFound             │ NotFound                                     │
//! │ DomainViolation      │ OutOfStock, StockOverflow                    │
//! │ EmptyCollection      │ NoBooksAvailable                             │
//! │ Storage              │ Storage, Output                              │
//! └──────────────────────┴──────────────────────────────────────────────┘
//! ```

use bookstore_core::{CoreError, ValidationError};
use bookstore_db::DbError;
use thiserror::Error;

/// Category of failure, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    InvalidEnumValue,
    NotFound,
    DomainViolation,
    EmptyCollection,
    Storage,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Please specify a valid --id flag.")]
    InvalidId(#[source] ValidationError),

    #[error("Please specify a positive --count value.")]
    InvalidAmount(#[source] ValidationError),

    #[error("Invalid date format. Use yyyy-MM-dd.")]
    InvalidDate(#[source] ValidationError),

    #[error("Invalid order-by field '{value}'. Use one of: title, author, date, count.")]
    InvalidOrderBy { value: String },

    #[error("Book not found.")]
    NotFound { id: i64 },

    #[error("Book is out of stock.")]
    OutOfStock { id: i64 },

    #[error("Cannot restock book {id}: count would overflow.")]
    StockOverflow { id: i64 },

    #[error("No books available to restock.")]
    NoBooksAvailable,

    #[error("Storage error: {0}")]
    Storage(#[from] DbError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::InvalidId(_)
            | CommandError::InvalidAmount(_)
            | CommandError::InvalidDate(_) => ErrorKind::MalformedInput,
            CommandError::InvalidOrderBy { .. } => ErrorKind::InvalidEnumValue,
            CommandError::NotFound { .. } => ErrorKind::NotFound,
            CommandError::OutOfStock { .. } | CommandError::StockOverflow { .. } => {
                ErrorKind::DomainViolation
            }
            CommandError::NoBooksAvailable => ErrorKind::EmptyCollection,
            CommandError::Storage(_) | CommandError::Output(_) => ErrorKind::Storage,
        }
    }

    /// Maps a `get` validation failure onto the flag that caused it.
    pub fn from_list_validation(err: ValidationError) -> Self {
        match err {
            ValidationError::NotAllowed { value, .. } => CommandError::InvalidOrderBy { value },
            other => CommandError::InvalidDate(other),
        }
    }

    /// Maps a repository error for a known `id`.
    pub fn from_db(id: i64, err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => CommandError::NotFound { id },
            other => CommandError::Storage(other),
        }
    }
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::OutOfStock { id } => CommandError::OutOfStock { id },
            CoreError::StockOverflow { id, .. } => CommandError::StockOverflow { id },
        }
    }
}

/// Result type for commands.
pub type CommandResult<T> = Result<T, CommandError>;
