//! Backend Module
//!
//! Server-side code for the car portal: an Axum HTTP server exposing the
//! authentication API.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Registration, login, password reset, token verification
//! - **`middleware`** - Bearer-token authentication
//! - **`notify`** - Outgoing email
//! - **`error`** - Backend error types and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── notify/         - Email delivery
//! └── error/          - Error types
//! ```
//!
//! # Storage
//!
//! Accounts live in a primary PostgreSQL database. In development every new
//! account is also mirrored to a secondary database; mirror failures are
//! logged and never fail the request.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Outgoing notifications
pub mod notify;

pub use error::BackendError;
pub use server::{create_app, ServerConfig};
