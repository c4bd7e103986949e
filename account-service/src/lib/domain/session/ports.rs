use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::Session;
use crate::domain::session::models::SessionId;

/// Persistence operations for login sessions.
///
/// Sessions are append-only: there is no update or delete.
#[async_trait]
pub trait SessionRepository: Send + Sync + 'static {
    /// Persist a session under its own id.
    ///
    /// # Errors
    /// * `AlreadyExists` - A session with this id is already stored
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, session: Session) -> Result<Session, SessionError>;

    /// Retrieve session by identifier (None if not found).
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, SessionError>;
}
