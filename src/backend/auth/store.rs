/**
 * Credential Stores
 *
 * The `CredentialStore` trait is the seam between the auth service and the
 * databases that hold user records. Two instances are wired into the
 * service through `CredentialStores`:
 *
 * - **primary** - always present, always written, the source of truth
 * - **secondary** - optional development mirror, written on a best-effort
 *   basis and never read by the auth flows
 *
 * # Mirror Writes
 *
 * `CredentialStores::mirror_write` copies a freshly created primary record
 * into the secondary. It always completes; failures are logged and reported
 * as `MirrorOutcome::Failed` for the caller to discard. There is no retry,
 * so a failed mirror write is permanently lost.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, UserRecord};

/// Errors raised by a credential store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this email already exists in the store
    #[error("email already exists: {email}")]
    Duplicate { email: String },

    /// Database driver error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store could not be reached
    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    /// Create a new unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Persistent user records, addressed by email or id
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Short name used in log lines
    fn label(&self) -> &'static str;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError>;

    /// Create a record, letting the store assign the id
    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError>;

    /// Write an existing record verbatim, keeping its id
    async fn insert_record(&self, user: &UserRecord) -> Result<(), StoreError>;
}

/// Result of a mirror write. Informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorOutcome {
    /// The record was copied to the secondary store
    Written,
    /// No secondary store is configured
    Skipped,
    /// The secondary store rejected the write or could not be reached
    Failed(String),
}

/// The primary store and the optional secondary mirror
#[derive(Clone)]
pub struct CredentialStores {
    primary: Arc<dyn CredentialStore>,
    secondary: Option<Arc<dyn CredentialStore>>,
}

impl CredentialStores {
    /// Stores with only a primary
    pub fn new(primary: Arc<dyn CredentialStore>) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Attach a secondary mirror
    pub fn with_secondary(mut self, secondary: Arc<dyn CredentialStore>) -> Self {
        self.secondary = Some(secondary);
        self
    }

    pub fn primary(&self) -> &dyn CredentialStore {
        self.primary.as_ref()
    }

    pub fn secondary(&self) -> Option<&dyn CredentialStore> {
        self.secondary.as_deref()
    }

    /// Copy `user` into the secondary store, if there is one.
    ///
    /// Never fails. The outcome is logged here; callers are expected to
    /// drop it.
    pub async fn mirror_write(&self, user: &UserRecord) -> MirrorOutcome {
        let Some(secondary) = &self.secondary else {
            return MirrorOutcome::Skipped;
        };

        match secondary.insert_record(user).await {
            Ok(()) => {
                tracing::info!(
                    user_id = %user.id,
                    store = secondary.label(),
                    "User also stored in secondary store"
                );
                MirrorOutcome::Written
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %user.id,
                    store = secondary.label(),
                    "Secondary store write failed: {}",
                    e
                );
                MirrorOutcome::Failed(e.to_string())
            }
        }
    }
}

/// In-process credential store
///
/// Enforces the same unique-email rule as the database schema. Used by the
/// test suites and for running the router without PostgreSQL.
#[derive(Debug, Default, Clone)]
pub struct MemoryCredentialStore {
    users: Arc<RwLock<HashMap<Uuid, UserRecord>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    fn label(&self) -> &'static str {
        "memory"
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let record = user.into_record();
        self.insert_record(&record).await?;
        Ok(record)
    }

    async fn insert_record(&self, user: &UserRecord) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate {
                email: user.email.clone(),
            });
        }
        users.insert(user.id, user.clone());
        Ok(())
    }
}
