//! Error taxonomy shared by every FinTrack service.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// The first four variants form the request-level taxonomy surfaced to clients.
/// Database-specific errors are wrapped in string form to keep this type
/// database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing resource, a resource owned by someone else, or an identity that
    /// could not be resolved.
    #[error("{0}")]
    NotFound(String),

    /// Duplicate email or category name.
    #[error("{0}")]
    AlreadyExists(String),

    /// Deleting a default category or another user's category.
    #[error("{0}")]
    OperationNotAllowed(String),

    /// Bad credentials. Deliberately non-specific.
    #[error("{0}")]
    AuthenticationFailed(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Report generation failed: {0}")]
    Report(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage failures, flattened to strings by the storage crate.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

impl Error {
    pub fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::Validation(ValidationError::InvalidInput(message.into()))
    }
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}
