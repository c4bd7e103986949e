//! Field-shape validation for account and login requests.
//!
//! Checks are pure and collect every violated field into a single
//! [`ValidationErrors`] value instead of stopping at the first failure.
//! Length limits imposed by storage are enforced by the account service,
//! not here.

use std::str::FromStr;

use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// A single violated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Composite error listing every field that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", self.joined())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an error for a single field.
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Record the outcome of a field check, keeping only failures.
    pub fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.push(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Every violation as `<field> <message>`, separated by `; `.
    fn joined(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{} {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Full name must be non-blank and made of letters, spaces, and `-'.` only.
pub fn validate_full_name(full_name: &str) -> Result<(), String> {
    if full_name.trim().is_empty() {
        return Err("can not be empty".to_string());
    }

    if !full_name
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'' || c == '.')
    {
        return Err("contains invalid characters".to_string());
    }

    Ok(())
}

/// Email must be present and RFC 5322 compliant.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("can not be empty".to_string());
    }

    email_address::EmailAddress::from_str(email)
        .map(|_| ())
        .map_err(|e| format!("is invalid: {}", e))
}

pub fn validate_password(password: &str) -> Result<(), String> {
    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        Err(format!(
            "must be at least {} characters, got {}",
            MIN_PASSWORD_LENGTH, length
        ))
    } else if length > MAX_PASSWORD_LENGTH {
        Err(format!(
            "must be at most {} characters, got {}",
            MAX_PASSWORD_LENGTH, length
        ))
    } else {
        Ok(())
    }
}
