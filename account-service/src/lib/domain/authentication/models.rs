use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::account::models::Account;
use crate::domain::session::models::SessionId;
use crate::domain::validation;
use crate::domain::validation::ValidationErrors;

/// Credentials presented at login
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }

    /// Check email and password together, reporting every failure.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check("email", validation::validate_email(&self.email));
        errors.check("password", validation::validate_password(&self.password));
        errors.into_result()
    }
}

/// Where a login request came from, recorded on the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientMetadata {
    pub client_ip: String,
    pub user_agent: String,
}

/// Lifetimes of the two tokens issued per login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenDurations {
    pub access: Duration,
    pub refresh: Duration,
}

/// Outcome of a successful login
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub account: Account,
    pub session_id: SessionId,
    pub access_token: String,
    pub refresh_token: String,
    pub access_token_expires_at: DateTime<Utc>,
    pub refresh_token_expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_command_validation() {
        let valid = LoginCommand::new("a@b.com".to_string(), "secret123".to_string());
        assert!(valid.validate().is_ok());

        let invalid = LoginCommand::new("nope".to_string(), "123".to_string());
        let errors = invalid.validate().unwrap_err();
        assert!(errors.contains("email"));
        assert!(errors.contains("password"));
    }
}
