use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::AccountData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::models::LoginResponse;
use crate::inbound::http::metadata::RequestMetadata;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    RequestMetadata(metadata): RequestMetadata,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    state
        .auth_service
        .login(LoginCommand::new(body.email, body.password), metadata)
        .await
        .map_err(ApiError::from)
        .map(|ref response| ApiSuccess::new(StatusCode::OK, response.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub account: AccountData,
    pub session_id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub access_token_expires_at: DateTime<Utc>,
    pub refresh_token_expires_at: DateTime<Utc>,
}

impl From<&LoginResponse> for LoginResponseData {
    fn from(response: &LoginResponse) -> Self {
        Self {
            account: (&response.account).into(),
            session_id: response.session_id.to_string(),
            access_token: response.access_token.clone(),
            refresh_token: response.refresh_token.clone(),
            access_token_expires_at: response.access_token_expires_at,
            refresh_token_expires_at: response.refresh_token_expires_at,
        }
    }
}
