use async_trait::async_trait;
use auth::Payload;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::ClientMetadata;
use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::models::LoginResponse;
use crate::domain::session::models::Session;
use crate::domain::session::models::SessionId;

/// Port for login and token verification.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Authenticate credentials, issue an access and a refresh token, and
    /// record a session for the refresh token.
    ///
    /// # Errors
    /// * `InvalidArgument` - Email or password is malformed
    /// * `NotFound` - No account with this email
    /// * `Unauthenticated` - Password does not match
    /// * `Internal` - Token issuance or session persistence failed
    async fn login(
        &self,
        command: LoginCommand,
        metadata: ClientMetadata,
    ) -> Result<LoginResponse, AuthError>;

    /// Verify token material and return its payload.
    ///
    /// # Errors
    /// * `Unauthenticated` - Token is malformed, tampered with, or expired
    async fn verify_token(&self, token: &str) -> Result<Payload, AuthError>;

    /// Retrieve a recorded session.
    ///
    /// # Errors
    /// * `NotFound` - Session does not exist
    async fn get_session(&self, id: &SessionId) -> Result<Session, AuthError>;
}
