use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Payload;
use auth::TokenError;
use chrono::SubsecRound;
use chrono::Utc;

use crate::domain::account::models::Account;
use crate::domain::account::ports::AccountRepository;
use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::ClientMetadata;
use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::models::LoginResponse;
use crate::domain::authentication::models::TokenDurations;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::session::models::Session;
use crate::domain::session::models::SessionId;
use crate::domain::session::ports::SessionRepository;

/// Login orchestration over the account and session stores.
///
/// A login walks Validating, Authenticating, TokenIssuing and
/// SessionPersisting in order and aborts at the first failing step.
/// Tokens already issued are not revoked when the session write fails.
pub struct AuthService<AR, SR>
where
    AR: AccountRepository,
    SR: SessionRepository,
{
    accounts: Arc<AR>,
    sessions: Arc<SR>,
    authenticator: Arc<Authenticator>,
    durations: TokenDurations,
}

impl<AR, SR> AuthService<AR, SR>
where
    AR: AccountRepository,
    SR: SessionRepository,
{
    pub fn new(
        accounts: Arc<AR>,
        sessions: Arc<SR>,
        authenticator: Arc<Authenticator>,
        durations: TokenDurations,
    ) -> Self {
        Self {
            accounts,
            sessions,
            authenticator,
            durations,
        }
    }

    async fn authenticate(&self, command: &LoginCommand) -> Result<Account, AuthError> {
        let account = self
            .accounts
            .find_by_email(&command.email)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Account lookup failed during login");
                AuthError::Internal("account lookup failed".to_string())
            })?
            .ok_or_else(|| AuthError::NotFound("account not found".to_string()))?;

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password.clone();
        let stored_hash = account.password_hash.clone();

        let verification = tokio::task::spawn_blocking(move || {
            authenticator.verify_credentials(&password, &stored_hash)
        })
        .await
        .map_err(|e| AuthError::Internal(format!("password check task failed: {}", e)))?;

        match verification {
            Ok(()) => Ok(account),
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::info!(account_id = %account.id, "Login rejected: wrong password");
                Err(AuthError::Unauthenticated("invalid password".to_string()))
            }
            Err(e) => {
                tracing::error!(account_id = %account.id, error = %e, "Stored password hash is unusable");
                Err(AuthError::Internal("password verification failed".to_string()))
            }
        }
    }

    fn issue_token(
        &self,
        subject: &str,
        kind: &str,
        duration: chrono::Duration,
    ) -> Result<(String, Payload), AuthError> {
        self.authenticator.issue_token(subject, duration).map_err(|e| {
            tracing::error!(error = %e, kind, "Token issuance failed");
            AuthError::Internal(format!("failed to issue {} token", kind))
        })
    }
}

#[async_trait]
impl<AR, SR> AuthServicePort for AuthService<AR, SR>
where
    AR: AccountRepository,
    SR: SessionRepository,
{
    async fn login(
        &self,
        command: LoginCommand,
        metadata: ClientMetadata,
    ) -> Result<LoginResponse, AuthError> {
        command.validate()?;

        let account = self.authenticate(&command).await?;

        let (access_token, access_payload) =
            self.issue_token(&account.email, "access", self.durations.access)?;
        let (refresh_token, refresh_payload) =
            self.issue_token(&account.email, "refresh", self.durations.refresh)?;

        let session = Session {
            id: SessionId(refresh_payload.id),
            email: account.email.clone(),
            client_ip: metadata.client_ip,
            user_agent: metadata.user_agent,
            refresh_token: refresh_token.clone(),
            expires_at: refresh_payload.expires_at,
            created_at: Utc::now().trunc_subsecs(6),
        };

        let session = self.sessions.create(session).await.map_err(|e| {
            tracing::error!(account_id = %account.id, error = %e, "Failed to persist session");
            AuthError::Internal("failed to create session".to_string())
        })?;

        tracing::info!(account_id = %account.id, session_id = %session.id, "Login succeeded");

        Ok(LoginResponse {
            account,
            session_id: session.id,
            access_token,
            refresh_token,
            access_token_expires_at: access_payload.expires_at,
            refresh_token_expires_at: session.expires_at,
        })
    }

    async fn verify_token(&self, token: &str) -> Result<Payload, AuthError> {
        self.authenticator.validate_token(token).map_err(|e| {
            match &e {
                TokenError::ExpiredToken => tracing::debug!("Rejected expired token"),
                other => tracing::debug!(error = %other, "Rejected invalid token"),
            }
            AuthError::Unauthenticated("invalid or expired token".to_string())
        })
    }

    async fn get_session(&self, id: &SessionId) -> Result<Session, AuthError> {
        self.sessions
            .find_by_id(id)
            .await
            .map_err(|e| {
                tracing::error!(session_id = %id, error = %e, "Session lookup failed");
                AuthError::Internal("session lookup failed".to_string())
            })?
            .ok_or_else(|| AuthError::NotFound(format!("session {}", id)))
    }
}
