/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email in the primary store
 * 2. Verify password using bcrypt
 * 3. Check the account role against the requested `loginType`
 * 4. Generate a 7-day JWT
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 400 body
 * - A role mismatch is a distinct 403 and issues no token
 * - Passwords are never logged or returned
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing field, or invalid credentials
/// * `403 Forbidden` - Credentials valid but the role differs from `loginType`
/// * `500 Internal Server Error` - Store or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "ada@example.com",
///   "password": "securepassword123",
///   "loginType": "buyer"
/// }
/// ```
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    let attempt = request.validate()?;

    tracing::info!("Login request for: {} as {}", attempt.email, attempt.login_type);

    let response = auth.login(attempt).await?;
    Ok(Json(response))
}
