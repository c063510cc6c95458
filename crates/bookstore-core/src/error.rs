//! # Error Types
//!
//! Domain-specific error types for bookstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookstore-core errors (this file)                                     │
//! │  ├── CoreError        - Stock rule violations                          │
//! │  └── ValidationError  - Malformed command-line values                  │
//! │                                                                         │
//! │  bookstore-db errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CommandError     - The message printed for the invocation         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Stock rule violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Purchase attempted on a book with `count == 0`.
    #[error("Book {id} is out of stock")]
    OutOfStock { id: i64 },

    /// Restock would overflow the stored count.
    #[error("Restocking book {id} by {amount} overflows its count of {current}")]
    StockOverflow { id: i64, current: i64, amount: i64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while turning raw flag values into typed arguments, before any
/// database access happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required flag is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., non-numeric id, malformed date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{} '{}' must be one of: {}", .field, .value, .allowed.join(", "))]
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
}

impl ValidationError {
    /// Name of the flag the error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OutOfStock { id: 2 };
        assert_eq!(err.to_string(), "Book 2 is out of stock");

        let err = ValidationError::NotAllowed {
            field: "order-by".to_string(),
            value: "bogus".to_string(),
            allowed: vec!["title".to_string(), "count".to_string()],
        };
        assert_eq!(err.to_string(), "order-by 'bogus' must be one of: title, count");
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::MustBePositive {
            field: "count".to_string(),
        };
        assert_eq!(err.field(), "count");
    }
}
