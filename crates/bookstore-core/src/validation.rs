//! # Validation Module
//!
//! Turns raw `--flag=value` strings into typed arguments.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: clap                                                         │
//! │  └── Splits `--id=7` into flag and raw value                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Integer / date parsing                                            │
//! │  └── Positivity rules                                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── CHECK (count >= 0)                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::validation::{parse_book_id, parse_restock_amount};
//!
//! assert_eq!(parse_book_id(Some("1")).unwrap(), 1);
//! assert_eq!(parse_restock_amount(None).unwrap(), None);
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::DATE_FORMAT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Values
// =============================================================================

/// Keeps a substring filter as typed, treating empty as absent.
pub fn substring_filter(raw: Option<&str>) -> Option<String> {
    raw.filter(|value| !value.is_empty()).map(str::to_string)
}

/// Trims a filter value, treating empty as absent.
pub fn normalize_filter(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Parses a `yyyy-MM-dd` date.
///
/// ## Example
/// ```rust
/// use bookstore_core::validation::parse_date;
///
/// assert!(parse_date("2020-01-01").is_ok());
/// assert!(parse_date("01/01/2020").is_err());
/// ```
pub fn parse_date(raw: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| {
        ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: e.to_string(),
        }
    })
}

// =============================================================================
// Numeric Values
// =============================================================================

/// Parses a required, positive book id.
///
/// ## Rules
/// - Must be present and non-empty
/// - Must be an integer
/// - Must be `>= 1`
pub fn parse_book_id(raw: Option<&str>) -> ValidationResult<i64> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty());
    let Some(raw) = raw else {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    };
    parse_positive("id", raw)
}

/// Parses an optional book id. Absent is fine; present must be valid.
pub fn parse_optional_book_id(raw: Option<&str>) -> ValidationResult<Option<i64>> {
    match raw {
        None => Ok(None),
        Some(_) => parse_book_id(raw).map(Some),
    }
}

/// Parses an optional explicit restock amount.
///
/// Explicit amounts must be positive; zero or negative amounts are rejected
/// rather than silently shrinking stock.
pub fn parse_restock_amount(raw: Option<&str>) -> ValidationResult<Option<i64>> {
    match raw.map(str::trim) {
        None => Ok(None),
        Some("") => Err(ValidationError::Required {
            field: "count".to_string(),
        }),
        Some(raw) => parse_positive("count", raw).map(Some),
    }
}

fn parse_positive(field: &str, raw: &str) -> ValidationResult<i64> {
    let value: i64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("'{}' is not an integer", raw),
    })?;

    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================
