use thiserror::Error;

use crate::domain::validation::ValidationErrors;

/// Top-level error for login and token verification
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Token or session infrastructure failed; details are logged, not returned
    #[error("Internal error: {0}")]
    Internal(String),
}
