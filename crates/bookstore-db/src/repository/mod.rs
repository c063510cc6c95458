//! # Repository Module
//!
//! Database repository implementations.
//!
//! ## Repository Pattern
//! ```text
//! Inventory command
//!      │
//!      │  db.books().get_by_id(1)
//!      ▼
//! BookRepository
//! ├── list_all(&self)
//! ├── list_ids(&self)
//! ├── get_by_id(&self, id)
//! ├── decrement_stock(&self, id)
//! └── add_stock(&self, id, amount)
//!      │
//!      │  SQL Query
//!      ▼
//! SQLite Database
//! ```
//!
//! ## Available Repositories
//!
//! - [`BookRepository`](book::BookRepository) - Book reads and stock updates

pub mod book;
