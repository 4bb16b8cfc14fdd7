/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the auth backend. Every
 * fallible handler returns `BackendError`, which carries enough information
 * to pick an HTTP status and a client-safe message.
 *
 * # Error Categories
 *
 * | Variant              | Status | Raised when                               |
 * |----------------------|--------|-------------------------------------------|
 * | `SharedError`        | 400    | missing/mismatched fields, malformed JSON |
 * | `ConflictError`      | 400    | email already registered                  |
 * | `InvalidCredentials` | 400    | unknown email or wrong password           |
 * | `ForbiddenError`     | 403    | role does not match the requested login   |
 * | `UnauthorizedError`  | 401    | missing or invalid bearer token           |
 * | `StorageError`       | 500    | primary store failure                     |
 * | `InternalError`      | 500    | hashing, signing or other unexpected fail |
 *
 * Unknown-email and wrong-password deliberately share one variant so the
 * two cases cannot be told apart from the response.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::store::StoreError;
use crate::shared::SharedError;

/// Message returned for both unknown email and wrong password.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Message returned for every 5xx response.
pub const SERVER_ERROR: &str = "Server error";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request validation error (missing field, bad JSON)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// A record with the same unique key already exists
    #[error("Conflict: {message}")]
    ConflictError {
        /// Human-readable error message
        message: String,
    },

    /// Login failed; the cause is intentionally not recorded here
    #[error("{}", INVALID_CREDENTIALS)]
    InvalidCredentials,

    /// Authenticated, but not allowed to act in the requested role
    #[error("Forbidden: {message}")]
    ForbiddenError {
        /// Human-readable error message
        message: String,
    },

    /// Missing, malformed or expired bearer token
    #[error("Unauthorized: {message}")]
    UnauthorizedError {
        /// Human-readable error message
        message: String,
    },

    /// Primary credential store failure
    #[error("Storage error: {0}")]
    StorageError(#[from] StoreError),

    /// Anything else that went wrong server-side
    #[error("Internal error: {message}")]
    InternalError {
        /// Detail for the server log; never sent to the client
        message: String,
    },
}

impl BackendError {
    /// Create a new validation error for `field`
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SharedError(SharedError::validation(field, message))
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::ConflictError {
            message: message.into(),
        }
    }

    /// Create a new forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::ForbiddenError {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::UnauthorizedError {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::ConflictError { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::ForbiddenError { .. } => StatusCode::FORBIDDEN,
            Self::UnauthorizedError { .. } => StatusCode::UNAUTHORIZED,
            Self::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that is safe to send to the client
    ///
    /// Server-side failures collapse to a generic message; the detail stays
    /// in the log.
    pub fn message(&self) -> String {
        match self {
            Self::SharedError(err) => err.user_message().to_string(),
            Self::ConflictError { message } => message.clone(),
            Self::InvalidCredentials => INVALID_CREDENTIALS.to_string(),
            Self::ForbiddenError { message } => message.clone(),
            Self::UnauthorizedError { message } => message.clone(),
            Self::StorageError(_) | Self::InternalError { .. } => SERVER_ERROR.to_string(),
        }
    }
}
