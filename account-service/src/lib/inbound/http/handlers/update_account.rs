use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::AccountData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::errors::AccountError;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::UpdateAccountCommand;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an account; omitted fields are left as is.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAccountRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

impl From<UpdateAccountRequest> for UpdateAccountCommand {
    fn from(request: UpdateAccountRequest) -> Self {
        UpdateAccountCommand::new(request.full_name, request.email)
    }
}

pub async fn update_account(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedAccount>,
    Path(id): Path<String>,
    Json(req): Json<UpdateAccountRequest>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    let account_id = AccountId::from_string(&id).map_err(AccountError::from)?;

    let current = state.account_service.get_account(&account_id).await?;
    principal.ensure_owner(&current.email)?;

    state
        .account_service
        .update_account(&account_id, req.into())
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}
