//! Authentication test helpers
//!
//! Builds the full router over in-memory stores so the HTTP surface can be
//! exercised without PostgreSQL or SMTP.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use uuid::Uuid;

use car_portal::backend::auth::password::hash_password;
use car_portal::backend::auth::service::AuthService;
use car_portal::backend::auth::sessions::TokenIssuer;
use car_portal::backend::auth::store::{
    CredentialStore, CredentialStores, MemoryCredentialStore, StoreError,
};
use car_portal::backend::auth::users::{NewUser, UserRecord};
use car_portal::backend::notify::{NotificationSender, NotifyError, OutgoingEmail};
use car_portal::backend::routes::create_router;
use car_portal::backend::server::{AppState, ServerConfig};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_FRONTEND_URL: &str = "http://localhost:5174";

/// Configuration with only the required values set
pub fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|key| match key {
        "PRIMARY_DATABASE_URL" => Some("postgres://unused/car_portal".to_string()),
        "JWT_SECRET" => Some(TEST_SECRET.to_string()),
        "FRONTEND_URL" => Some(TEST_FRONTEND_URL.to_string()),
        _ => None,
    })
    .expect("test configuration should be valid")
}

/// Notifier that keeps every email it is asked to send
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    pub sent: Arc<Mutex<Vec<OutgoingEmail>>>,
}

#[async_trait]
impl NotificationSender for RecordingNotifier {
    async fn send(&self, email: OutgoingEmail) -> Result<(), NotifyError> {
        self.sent.lock().await.push(email);
        Ok(())
    }
}

/// Notifier whose sends always fail
pub struct FailingNotifier;

#[async_trait]
impl NotificationSender for FailingNotifier {
    async fn send(&self, _email: OutgoingEmail) -> Result<(), NotifyError> {
        Err(NotifyError::InvalidAddress("relay refused".to_string()))
    }
}

/// Store standing in for a database that cannot be reached
pub struct UnreachableStore;

#[async_trait]
impl CredentialStore for UnreachableStore {
    fn label(&self) -> &'static str {
        "unreachable"
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<UserRecord>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn insert(&self, _user: NewUser) -> Result<UserRecord, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn insert_record(&self, _user: &UserRecord) -> Result<(), StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
}

/// Where mirror writes go in a `TestApp`
pub enum Secondary {
    None,
    Memory,
    Unreachable,
}

/// A running router plus handles on its collaborators
pub struct TestApp {
    pub server: TestServer,
    pub primary: MemoryCredentialStore,
    pub secondary: Option<MemoryCredentialStore>,
    pub notifier: RecordingNotifier,
    pub tokens: TokenIssuer,
}

impl TestApp {
    /// Memory primary and memory secondary, recording notifier
    pub fn new() -> Self {
        Self::with_secondary(Secondary::Memory)
    }

    pub fn with_secondary(secondary: Secondary) -> Self {
        let notifier = RecordingNotifier::default();
        Self::build(secondary, Arc::new(notifier.clone()), notifier)
    }

    /// App whose notifier fails every send
    pub fn with_failing_notifier() -> Self {
        Self::build(
            Secondary::Memory,
            Arc::new(FailingNotifier),
            RecordingNotifier::default(),
        )
    }

    fn build(
        secondary: Secondary,
        sender: Arc<dyn NotificationSender>,
        notifier: RecordingNotifier,
    ) -> Self {
        let config = test_config();
        let primary = MemoryCredentialStore::new();
        let mut stores = CredentialStores::new(Arc::new(primary.clone()));

        let secondary_store = match secondary {
            Secondary::None => None,
            Secondary::Memory => {
                let store = MemoryCredentialStore::new();
                stores = stores.with_secondary(Arc::new(store.clone()));
                Some(store)
            }
            Secondary::Unreachable => {
                stores = stores.with_secondary(Arc::new(UnreachableStore));
                None
            }
        };

        let tokens = TokenIssuer::new(&config.jwt_secret);
        let auth = AuthService::new(stores, tokens.clone(), sender, config.frontend_url.clone());
        let router = create_router(AppState::new(auth), &config);

        Self {
            server: TestServer::new(router).expect("failed to start test server"),
            primary,
            secondary: secondary_store,
            notifier,
            tokens,
        }
    }

    /// Register through the API and return the response body
    pub async fn register(&self, email: &str, password: &str) -> Value {
        let response = self
            .server
            .post("/api/auth/register")
            .json(&register_body(email, password))
            .await;
        response.assert_status_ok();
        response.json()
    }

    /// Insert an account with the given role straight into the primary store
    pub async fn seed_user(&self, email: &str, password: &str, role: &str) -> UserRecord {
        let new_user = NewUser {
            first_name: "Sam".to_string(),
            last_name: "Seller".to_string(),
            name: "Sam Seller".to_string(),
            email: email.to_string(),
            phone: "555-0199".to_string(),
            password_hash: hash_password(password).expect("hashing should succeed"),
            role: role.to_string(),
        };
        self.primary
            .insert(new_user)
            .await
            .expect("seeding should succeed")
    }
}

/// A complete registration body
pub fn register_body(email: &str, password: &str) -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": email,
        "phone": "555-0100",
        "password": password,
        "confirmPassword": password
    })
}

/// A login body
pub fn login_body(email: &str, password: &str, login_type: &str) -> Value {
    json!({
        "email": email,
        "password": password,
        "loginType": login_type
    })
}
