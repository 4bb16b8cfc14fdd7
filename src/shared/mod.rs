//! Shared Module
//!
//! This module contains the types that cross the HTTP boundary: the public
//! user views returned by the auth endpoints and the validation errors raised
//! while reading request bodies.
//!
//! # Overview
//!
//! Nothing in here touches the database or the network. Types are plain
//! serde structures so a client crate could depend on them directly.

/// Shared error types
pub mod error;

/// Public user views
pub mod user;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use user::{AuthenticatedUser, PublicUser, DEFAULT_ROLE};
