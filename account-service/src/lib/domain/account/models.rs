use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::errors::AccountIdError;
use crate::domain::validation;
use crate::domain::validation::ValidationErrors;

/// Longest full name or email the store accepts, in characters.
pub const MAX_FIELD_LENGTH: usize = 255;

/// Account aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The all-zero sentinel, never assigned to a stored account.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Parse an account ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(s)
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Reject `value` when it is longer than the store allows.
pub fn ensure_max_length(field: &'static str, value: &str) -> Result<(), AccountError> {
    if value.chars().count() > MAX_FIELD_LENGTH {
        Err(AccountError::StringTooLong {
            field,
            max: MAX_FIELD_LENGTH,
        })
    } else {
        Ok(())
    }
}

/// Command to create a new account
#[derive(Debug, Clone)]
pub struct CreateAccountCommand {
    pub full_name: String,
    pub email: String,
    /// Plain text password, hashed by the service
    pub password: String,
}

impl CreateAccountCommand {
    pub fn new(full_name: String, email: String, password: String) -> Self {
        Self {
            full_name,
            email,
            password,
        }
    }

    /// Check the shape of every field, reporting all failures together.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check("full_name", validation::validate_full_name(&self.full_name));
        errors.check("email", validation::validate_email(&self.email));
        errors.check("password", validation::validate_password(&self.password));
        errors.into_result()
    }
}

/// Command to partially update an account.
///
/// Absent fields keep their stored value. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateAccountCommand {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

impl UpdateAccountCommand {
    pub fn new(full_name: Option<String>, email: Option<String>) -> Self {
        Self {
            full_name: full_name.filter(|s| !s.is_empty()),
            email: email.filter(|s| !s.is_empty()),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        if self.full_name.is_none() && self.email.is_none() {
            return Err(ValidationErrors::single(
                "full_name, email",
                "at least one field must be provided",
            ));
        }

        let mut errors = ValidationErrors::new();
        if let Some(full_name) = &self.full_name {
            errors.check("full_name", validation::validate_full_name(full_name));
        }
        if let Some(email) = &self.email {
            errors.check("email", validation::validate_email(email));
        }
        errors.into_result()
    }
}
