/**
 * User Model and Database Operations
 *
 * This module handles the stored user record and its PostgreSQL-backed
 * credential store. The same store type is used for the primary database
 * and for the development mirror; they differ only in the pool they hold.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::store::{CredentialStore, StoreError};
use crate::shared::{AuthenticatedUser, PublicUser};

/// User struct representing a row of the `users` table
///
/// Deliberately not `Serialize`: convert into `PublicUser` or
/// `AuthenticatedUser` before returning anything to a client.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRecord {
    /// Unique user ID (UUID), generated on insert
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// "first last"
    pub name: String,
    /// User email address (unique per store)
    pub email: String,
    pub phone: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Role tag ("buyer", "seller", "admin")
    pub role: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields needed to create a user; the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub role: String,
}

impl NewUser {
    /// Turn this into a full record with a fresh id
    pub fn into_record(self) -> UserRecord {
        UserRecord {
            id: Uuid::new_v4(),
            first_name: self.first_name,
            last_name: self.last_name,
            name: self.name,
            email: self.email,
            phone: self.phone,
            password_hash: self.password_hash,
            role: self.role,
            created_at: Utc::now(),
        }
    }
}

impl From<&UserRecord> for PublicUser {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

impl From<UserRecord> for AuthenticatedUser {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            name: user.name,
            email: user.email,
            phone: user.phone,
            role: user.role,
        }
    }
}

/// Credential store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
    label: &'static str,
}

impl PgCredentialStore {
    /// Wrap a pool. `label` names the store in log lines ("primary", "secondary").
    pub fn new(pool: PgPool, label: &'static str) -> Self {
        Self { pool, label }
    }

    /// Get the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Map a unique-constraint violation on insert to `StoreError::Duplicate`
fn map_insert_error(err: sqlx::Error, email: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::Duplicate {
            email: email.to_string(),
        },
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    fn label(&self) -> &'static str {
        self.label
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, first_name, last_name, name, email, phone, password_hash, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, first_name, last_name, name, email, phone, password_hash, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let record = user.into_record();
        self.insert_record(&record).await?;
        Ok(record)
    }

    async fn insert_record(&self, user: &UserRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, name, email, phone, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(&user.role)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &user.email))?;

        Ok(())
    }
}
