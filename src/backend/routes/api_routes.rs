/**
 * API Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - Create an account
 * - `POST /api/auth/login` - Log in with a role
 * - `POST /api/auth/forgot-password` - Request a reset link
 * - `GET /api/auth/verify` - Resolve the bearer token (requires authentication)
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{forgot_password, login, register, verify};
use crate::backend::middleware::require_auth;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// `/api/auth/verify` sits behind `require_auth`; the other auth routes are
/// public.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/verify", get(verify))
        .route_layer(middleware::from_fn_with_state(
            app_state.auth.clone(),
            require_auth,
        ));

    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/forgot-password", post(forgot_password))
        .merge(protected)
}
