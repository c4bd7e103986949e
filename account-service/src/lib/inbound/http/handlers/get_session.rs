use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::session::models::Session;
use crate::domain::session::models::SessionId;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn get_session(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedAccount>,
    Path(session_id): Path<String>,
) -> Result<ApiSuccess<SessionData>, ApiError> {
    let session_id = SessionId::from_string(&session_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let session = state.auth_service.get_session(&session_id).await?;
    principal.ensure_owner(&session.email)?;

    Ok(ApiSuccess::new(StatusCode::OK, (&session).into()))
}

/// Session as exposed over HTTP; the refresh token itself is withheld.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionData {
    pub id: String,
    pub email: String,
    pub client_ip: String,
    pub user_agent: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<&Session> for SessionData {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.to_string(),
            email: session.email.clone(),
            client_ip: session.client_ip.clone(),
            user_agent: session.user_agent.clone(),
            expires_at: session.expires_at,
            created_at: session.created_at,
        }
    }
}
