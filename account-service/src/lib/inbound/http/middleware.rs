use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use uuid::Uuid;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Principal behind a verified bearer token, stored in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    /// Token subject, the account email
    pub email: String,
    /// Id of the presented token, recorded on rejected requests
    pub token_id: Uuid,
}

impl AuthenticatedAccount {
    /// Reject callers acting on an account they do not own.
    pub fn ensure_owner(&self, email: &str) -> Result<(), ApiError> {
        if self.email == email {
            return Ok(());
        }

        tracing::warn!(token_id = %self.token_id, "Rejected request from non-owner");
        Err(ApiError::Forbidden("invoker is not owner".to_string()))
    }
}

/// Middleware that verifies the bearer token and records the caller.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)
        .map_err(IntoResponse::into_response)?
        .to_string();

    let payload = state
        .auth_service
        .verify_token(&token)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    req.extensions_mut().insert(AuthenticatedAccount {
        email: payload.subject,
        token_id: payload.id,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_owner() {
        let principal = AuthenticatedAccount {
            email: "a@b.com".to_string(),
            token_id: Uuid::new_v4(),
        };

        assert!(principal.ensure_owner("a@b.com").is_ok());
        assert!(matches!(
            principal.ensure_owner("mallory@b.com"),
            Err(ApiError::Forbidden(_))
        ));
    }
}
