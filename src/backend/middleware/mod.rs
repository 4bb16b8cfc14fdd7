//! Middleware Module
//!
//! Request-processing middleware for the backend server.
//!
//! - **`auth`** - Bearer-token authentication for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum::{middleware, routing::get, Router};
//! use car_portal::backend::auth::{verify, AuthService};
//! use car_portal::backend::middleware::require_auth;
//!
//! fn protected(auth: Arc<AuthService>) -> Router {
//!     Router::new()
//!         .route("/api/auth/verify", get(verify))
//!         .route_layer(middleware::from_fn_with_state(auth, require_auth))
//! }
//! ```

pub mod auth;

pub use auth::{bearer_token, require_auth, AuthUser};
