//! Common test utilities and helpers
//!
//! - In-memory application fixtures (`TestApp`)
//! - Authentication helpers and test doubles
//! - PostgreSQL fixtures for the database-backed tests
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
pub use database::*;
