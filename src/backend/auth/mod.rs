//! Authentication Module
//!
//! This module handles user registration, login, password-reset requests and
//! token verification.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User record and PostgreSQL store
//! ├── store.rs        - CredentialStore trait, mirror writes, memory store
//! ├── password.rs     - bcrypt hashing
//! ├── sessions.rs     - JWT token management
//! ├── service.rs      - AuthService orchestration
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: details validated → hash stored in primary (mirrored to
//!    secondary when configured) → JWT returned
//! 2. **Login**: credentials verified → role checked against `loginType` →
//!    JWT returned
//! 3. **Forgot password**: reset link emailed if the account exists
//! 4. **Verify**: bearer token resolved to a user by the auth middleware
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (cost 10) before storage
//! - Tokens are HS256 JWTs; session tokens last 7 days, reset tokens 1 hour
//! - Invalid credentials give one response regardless of cause

/// User data model and database operations
pub mod users;

/// Credential store abstraction
pub mod store;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Auth service
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};
pub use handlers::{forgot_password, login, register, verify};
pub use service::AuthService;
pub use sessions::TokenIssuer;
pub use store::{CredentialStore, CredentialStores, MemoryCredentialStore, MirrorOutcome, StoreError};
pub use users::{PgCredentialStore, UserRecord};
