/**
 * Authentication Handler Types
 *
 * Request and response bodies for the auth endpoints. Request fields are
 * all optional at the serde level so that a missing field becomes our own
 * validation error (`{ "message": ... }`) instead of a framework rejection.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::service::{LoginAttempt, Registration};
use crate::shared::{AuthenticatedUser, PublicUser, SharedError};

/// Treat absent, empty and whitespace-only values alike
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Register request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Plaintext password (hashed before storage)
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl RegisterRequest {
    /// Check presence of every field and that the passwords match
    pub fn validate(self) -> Result<Registration, SharedError> {
        let (
            Some(first_name),
            Some(last_name),
            Some(email),
            Some(phone),
            Some(password),
            Some(confirm_password),
        ) = (
            present(self.first_name),
            present(self.last_name),
            present(self.email),
            present(self.phone),
            present(self.password),
            present(self.confirm_password),
        )
        else {
            return Err(SharedError::validation("body", "All fields are required"));
        };

        if password != confirm_password {
            return Err(SharedError::validation(
                "confirmPassword",
                "Passwords do not match",
            ));
        }

        Ok(Registration {
            first_name,
            last_name,
            email,
            phone,
            password,
        })
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    /// Role the user is logging in as ("buyer", "seller", ...)
    pub login_type: Option<String>,
}

impl LoginRequest {
    pub fn validate(self) -> Result<LoginAttempt, SharedError> {
        match (
            present(self.email),
            present(self.password),
            present(self.login_type),
        ) {
            (Some(email), Some(password), Some(login_type)) => Ok(LoginAttempt {
                email,
                password,
                login_type,
            }),
            _ => Err(SharedError::validation(
                "body",
                "Email, password and login type are required",
            )),
        }
    }
}

/// Forgot-password request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ForgotPasswordRequest {
    pub email: Option<String>,
}

impl ForgotPasswordRequest {
    pub fn validate(self) -> Result<String, SharedError> {
        present(self.email).ok_or_else(|| SharedError::validation("email", "Email is required"))
    }
}

/// Auth response
///
/// Returned by register and login.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    /// Public user fields (no password hash)
    pub user: PublicUser,
    /// JWT token (7-day expiration)
    pub token: String,
}

/// Plain `{ "message": ... }` response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Verify response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VerifyResponse {
    pub user: AuthenticatedUser,
}
