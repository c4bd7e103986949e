use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::AccountData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::CreateAccountCommand;
use crate::inbound::http::router::AppState;

/// HTTP request body for creating an account (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAccountRequest {
    full_name: String,
    email: String,
    password: String,
}

impl From<CreateAccountRequest> for CreateAccountCommand {
    fn from(request: CreateAccountRequest) -> Self {
        CreateAccountCommand::new(request.full_name, request.email, request.password)
    }
}

pub async fn create_account(
    State(state): State<AppState>,
    Json(body): Json<CreateAccountRequest>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    state
        .account_service
        .create_account(body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::CREATED, account.into()))
}
