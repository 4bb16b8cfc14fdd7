//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration
//! └── init.rs         - Database pools, notifier and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `ServerConfig::from_env` validates the environment
//! 2. **Primary database**: connected and migrated, failure aborts startup
//! 3. **Secondary database**: connected lazily (development only); an
//!    unreachable mirror never blocks startup
//! 4. **Notifier**: SMTP when configured, otherwise disabled
//! 5. **Router**: routes, CORS, tracing and static uploads

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, DeploymentMode, ServerConfig, SmtpConfig};
pub use init::{build_notifier, create_app, InitError};
pub use state::AppState;
