use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::AccountData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    #[serde(default)]
    email: String,
}

pub async fn get_account_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    state
        .account_service
        .get_account_by_email(&query.email)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}
