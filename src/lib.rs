//! Car Portal - Authentication Backend
//!
//! Car Portal is the REST backend behind a car-listing site. This crate holds
//! the account side of it: registration, login with JWT issuance, the
//! password-reset email flow and token verification.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that cross the wire (public user views, shared errors)
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, router and middleware
//!   - Auth service, credential stores, JWT issuance
//!   - Password-reset notifications over SMTP
//!
//! # Storage
//!
//! Users live in a primary PostgreSQL database. Outside production an
//! optional secondary database receives a best-effort mirror of every new
//! account; the primary is always the source of truth.
//!
//! # Usage
//!
//! ```rust,no_run
//! use car_portal::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
