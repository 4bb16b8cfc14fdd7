/**
 * Register Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate that every field is present and the passwords match
 * 2. Reject the email if the primary store already has it
 * 3. Hash the password (bcrypt, cost 10)
 * 4. Insert into the primary store
 * 5. Mirror to the secondary store (best effort)
 * 6. Return the public user fields and a 7-day JWT
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing field, password mismatch, malformed body,
///   or email already registered
/// * `500 Internal Server Error` - Primary store, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "firstName": "Ada",
///   "lastName": "Lovelace",
///   "email": "ada@example.com",
///   "phone": "555-0100",
///   "password": "securepassword123",
///   "confirmPassword": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "user": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "name": "Ada Lovelace",
///     "email": "ada@example.com",
///     "role": "buyer"
///   },
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn register(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;

    let registration = request.validate().map_err(|e| {
        tracing::warn!("Invalid registration request: {}", e);
        e
    })?;

    tracing::info!("Register request for email: {}", registration.email);

    let response = auth.register(registration).await?;
    Ok(Json(response))
}
