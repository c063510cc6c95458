//! # bookstore-core: Pure Domain Logic for the Bookstore Inventory
//!
//! This crate holds everything about books that does not touch a database
//! or a terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Bookstore Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 bookstore CLI (apps/bookstore-cli)              │   │
//! │  │        get ──► buy ──► restock      (one command per run)       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bookstore-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   query   │  │  restock  │  │ validation│  │   │
//! │  │   │   Book    │  │ BookFilter│  │  amounts  │  │  id, date │  │   │
//! │  │   │           │  │  SortKey  │  │  picking  │  │  amount   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • RANDOMNESS IS INJECTED                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                bookstore-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repository             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The [`Book`] record
//! - [`query`] - Listing filters and sort keys
//! - [`restock`] - Random restock amounts and random book selection
//! - [`validation`] - Parsing of raw command-line values
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstore_core::query::ListQuery;
//!
//! let query = ListQuery::parse(Some("book"), None, Some("2020-01-01"), Some("title")).unwrap();
//! assert!(query.filter.date.is_some());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod query;
pub mod restock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use query::{BookFilter, ListQuery, SortKey};
pub use types::Book;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Date format accepted by `--date` and used when printing `year`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
