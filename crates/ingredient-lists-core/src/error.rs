//! Error Types
//!
//! Store errors are surfaced to the user as transient notices.
//! Persistence errors are logged and resolved by discarding state.

use thiserror::Error;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Empty or invalid name, count or quantity
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Category name collides with an existing category
    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    /// Reference to a missing list, ingredient or category
    #[error("Not found: {0}")]
    NotFound(String),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        StoreError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        StoreError::NotFound(msg.into())
    }
}

/// Errors raised while reading or writing the persisted record
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record parsed but violates a store invariant
    #[error("Corrupt record: {0}")]
    Corrupt(String),

    /// The key-value backend refused the operation
    #[error("Storage error: {0}")]
    Storage(String),
}
