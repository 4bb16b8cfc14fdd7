/**
 * Forgot Password Handler
 *
 * POST /api/auth/forgot-password. Emails a one-hour reset link when the
 * account exists. The response is the same whether it exists or not, and
 * email delivery failures are only logged.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{ForgotPasswordRequest, MessageResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Forgot-password handler
///
/// # Errors
///
/// * `400 Bad Request` - Email missing or body malformed
/// * `500 Internal Server Error` - Primary store failure
pub async fn forgot_password(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<ForgotPasswordRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, BackendError> {
    let Json(request) = payload?;
    let email = request.validate()?;

    let response = auth.forgot_password(&email).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::backend::auth::service::RESET_REQUESTED_MESSAGE;
    use crate::backend::auth::sessions::TokenIssuer;
    use crate::backend::auth::store::{CredentialStores, MemoryCredentialStore};
    use crate::backend::notify::DisabledNotifier;

    fn service() -> Arc<AuthService> {
        Arc::new(AuthService::new(
            CredentialStores::new(Arc::new(MemoryCredentialStore::new())),
            TokenIssuer::new("handler-secret"),
            Arc::new(DisabledNotifier),
            "http://localhost:5174",
        ))
    }

    #[tokio::test]
    async fn test_forgot_password_unknown_email() {
        let request = ForgotPasswordRequest {
            email: Some("ghost@example.com".to_string()),
        };
        let Json(response) = forgot_password(State(service()), Ok(Json(request)))
            .await
            .unwrap();
        assert_eq!(response.message, RESET_REQUESTED_MESSAGE);
    }

    #[tokio::test]
    async fn test_forgot_password_missing_email() {
        let request = ForgotPasswordRequest { email: None };
        let err = forgot_password(State(service()), Ok(Json(request)))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Email is required");
    }
}
