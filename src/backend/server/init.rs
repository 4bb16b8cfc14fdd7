/**
 * Server Initialization
 *
 * This module handles the setup of the Axum HTTP server: database pools,
 * migrations, the email transport and route configuration.
 *
 * # Database Handling
 *
 * The primary database is required. Startup fails if it cannot be reached
 * or migrated. The secondary database is a best-effort mirror: its pool
 * connects lazily and its migrations run in the background, so a missing
 * mirror only produces warnings.
 */

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::store::{CredentialStore, CredentialStores};
use crate::backend::auth::users::PgCredentialStore;
use crate::backend::notify::{DisabledNotifier, NotificationSender, NotifyError, SmtpNotifier};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

const MAX_CONNECTIONS: u32 = 5;
const SECONDARY_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] MigrateError),
    #[error("email transport error: {0}")]
    Email(#[from] NotifyError),
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router, InitError> {
    tracing::info!(mode = ?config.mode, "Initializing car portal backend");

    let primary = connect_primary(&config.primary_database_url).await?;
    let mut stores = CredentialStores::new(Arc::new(PgCredentialStore::new(primary, "primary")));

    match config.secondary_database_url.as_deref() {
        Some(url) => {
            let secondary = connect_secondary(url)?;
            stores = stores.with_secondary(
                Arc::new(PgCredentialStore::new(secondary, "secondary")) as Arc<dyn CredentialStore>
            );
        }
        None => tracing::info!("Secondary database disabled"),
    }

    let auth = AuthService::new(
        stores,
        TokenIssuer::new(&config.jwt_secret),
        build_notifier(config)?,
        config.frontend_url.clone(),
    );

    let app = create_router(AppState::new(auth), config);
    tracing::info!("Router configured");

    Ok(app)
}

/// Pick the email transport for this configuration
pub fn build_notifier(config: &ServerConfig) -> Result<Arc<dyn NotificationSender>, InitError> {
    match &config.smtp {
        Some(smtp) => {
            tracing::info!(host = %smtp.host, port = smtp.port, "SMTP notifier configured");
            Ok(Arc::new(SmtpNotifier::new(smtp)?))
        }
        None => {
            tracing::warn!("SMTP_HOST not set, password reset emails are disabled");
            Ok(Arc::new(DisabledNotifier))
        }
    }
}

async fn connect_primary(url: &str) -> Result<PgPool, InitError> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to primary database: {:?}", e);
            e
        })?;
    tracing::info!("Primary database connection pool created");

    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Primary database migrations applied");

    Ok(pool)
}

fn connect_secondary(url: &str) -> Result<PgPool, InitError> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(SECONDARY_ACQUIRE_TIMEOUT)
        .connect_lazy(url)?;

    let migrate_pool = pool.clone();
    tokio::spawn(async move {
        match sqlx::migrate!().run(&migrate_pool).await {
            Ok(()) => tracing::info!("Secondary database migrations applied"),
            Err(e) => tracing::warn!("Secondary database unavailable, mirror writes will fail: {}", e),
        }
    });

    Ok(pool)
}
