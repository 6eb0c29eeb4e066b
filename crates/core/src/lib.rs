//! FinTrack Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for FinTrack: users and
//! authentication rules, categories, expenses, analytics and report rendering.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod analytics;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod reports;
pub mod users;
pub mod utils;

#[cfg(test)]
mod testing;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
