//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports
//! ├── router.rs       - create_router, CORS, tracing, uploads, fallback
//! └── api_routes.rs   - /api/auth/* endpoints
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
