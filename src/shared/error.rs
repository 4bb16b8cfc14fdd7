//! Shared Error Types
//!
//! Errors raised while turning a request body into something the auth
//! service can work with. They are independent of axum so they can be
//! produced by plain validation functions and unit-tested without a server.
//!
//! # Error Categories
//!
//! - `SerializationError` - The body was not valid JSON for the endpoint
//! - `ValidationError` - A field was missing, empty or inconsistent
//!
//! # Usage
//!
//! ```rust
//! use car_portal::shared::error::SharedError;
//!
//! let error = SharedError::validation("confirmPassword", "Passwords do not match");
//! assert_eq!(error.user_message(), "Passwords do not match");
//! ```
use thiserror::Error;

/// Request-level error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The message that is safe to show to the caller.
    ///
    /// Unlike `Display`, this omits the field name and the error category.
    pub fn user_message(&self) -> &str {
        match self {
            Self::SerializationError { message } => message,
            Self::ValidationError { message, .. } => message,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("Invalid JSON body: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("email", "Email is required");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "email");
                assert_eq!(message, "Email is required");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_user_message_omits_field() {
        let error = SharedError::validation("password", "Passwords do not match");
        assert_eq!(error.user_message(), "Passwords do not match");
        assert!(error.to_string().contains("password"));
    }

    #[test]
    fn test_from_serde_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{ invalid json }");
        let shared_error: SharedError = result.unwrap_err().into();

        match shared_error {
            SharedError::SerializationError { message } => {
                assert!(message.starts_with("Invalid JSON body"));
            }
            _ => panic!("Expected SerializationError from serde error"),
        }
    }
}
