//! Authentication Handlers Module
//!
//! HTTP handlers for the auth endpoints. Each handler reads and validates
//! its body, then makes a single call into `AuthService`.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs              - Module exports and documentation
//! ├── types.rs            - Request and response types
//! ├── register.rs         - User registration handler
//! ├── login.rs            - User authentication handler
//! ├── forgot_password.rs  - Password reset request handler
//! └── verify.rs           - Token verification handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`forgot_password`** - POST /api/auth/forgot-password
//! - **`verify`** - GET /api/auth/verify (requires a bearer token)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Forgot-password handler
pub mod forgot_password;

/// Verify handler
pub mod verify;

// Re-export commonly used types
pub use types::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest,
    VerifyResponse,
};

// Re-export handlers
pub use forgot_password::forgot_password;
pub use login::login;
pub use register::register;
pub use verify::verify;
