//! SQLite storage implementation for FinTrack.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `fintrack-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for users, categories and expenses
//! - Database-specific model types (with Diesel derives)
//!
//! Reads go straight to the pool. Writes are funnelled through a single writer
//! task (`WriteHandle`) so SQLite never sees two concurrent write transactions.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod categories;
pub mod expenses;
pub mod users;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use users::UserRepository;

// Re-export from fintrack-core for convenience
pub use fintrack_core::errors::{DatabaseError, Error, Result};
