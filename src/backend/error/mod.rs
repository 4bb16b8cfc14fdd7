//! Backend Error Module
//!
//! Error types used by HTTP handlers and the auth service, and their
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and rejection conversions
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use car_portal::backend::error::BackendError;
//! use axum::response::Json;
//!
//! async fn handler() -> Result<Json<()>, BackendError> {
//!     Err(BackendError::conflict("Email already registered"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, INVALID_CREDENTIALS, SERVER_ERROR};
