use thiserror::Error;

use crate::domain::validation::ValidationErrors;

/// Error for AccountId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for notification dispatch operations
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    #[error("Failed to serialize notification: {0}")]
    SerializationFailed(String),

    #[error("Failed to publish notification to broker: {0}")]
    PublishFailed(String),
}

/// Top-level error for all account operations
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationErrors),

    #[error("Account not found: {0}")]
    NotFound(String),

    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    #[error("{field} exceeds the maximum length of {max} characters")]
    StringTooLong { field: &'static str, max: usize },

    #[error("No rows affected: account {0} does not exist")]
    NoRowsAffected(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<AccountIdError> for AccountError {
    fn from(err: AccountIdError) -> Self {
        AccountError::InvalidArgument(ValidationErrors::single("id", err.to_string()))
    }
}
