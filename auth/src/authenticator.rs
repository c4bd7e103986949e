use chrono::Duration;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Payload;
use crate::token::TokenError;
use crate::token::TokenMaker;

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds the process-wide symmetric key through its `TokenMaker`; build it once
/// at startup and share it behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_maker: TokenMaker,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `symmetric_key` - 32 byte key used to seal and open tokens
    ///
    /// # Errors
    /// * `InvalidKeySize` - Key has the wrong length
    pub fn new(symmetric_key: &[u8]) -> Result<Self, TokenError> {
        Ok(Self {
            password_hasher: PasswordHasher::new(),
            token_maker: TokenMaker::new(symmetric_key)?,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    pub fn verify_credentials(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<(), AuthenticationError> {
        match self.password_hasher.compare(password, stored_hash) {
            Ok(()) => Ok(()),
            Err(PasswordError::Mismatch) => Err(AuthenticationError::InvalidCredentials),
            Err(e) => Err(AuthenticationError::PasswordError(e)),
        }
    }

    /// Issue a token for `subject` valid for `duration`.
    pub fn issue_token(
        &self,
        subject: &str,
        duration: Duration,
    ) -> Result<(String, Payload), TokenError> {
        self.token_maker.create_token(subject, duration)
    }

    /// Validate a token and return its payload.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed or was tampered with
    /// * `ExpiredToken` - Token is past its expiry
    pub fn validate_token(&self, token: &str) -> Result<Payload, TokenError> {
        self.token_maker.verify_token(token)
    }
}
