/**
 * Auth Service
 *
 * Orchestrates the credential stores, password hashing, token issuance and
 * reset notifications behind the four auth endpoints. Handlers validate the
 * request body and call exactly one method here.
 *
 * # Store Policy
 *
 * - Reads (login, forgot-password, token authentication) hit the primary
 *   store only.
 * - Registration writes the primary first and fails if that write fails,
 *   then mirrors the record to the secondary. The mirror outcome is
 *   discarded.
 *
 * # Enumeration Resistance
 *
 * Unknown email and wrong password produce the same error. Forgot-password
 * answers with the same message whether or not the account exists.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::auth::handlers::types::{AuthResponse, MessageResponse};
use crate::backend::auth::password::{hash_password, verify_password};
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::store::{CredentialStores, StoreError};
use crate::backend::auth::users::NewUser;
use crate::backend::error::BackendError;
use crate::backend::notify::{password_reset_email, reset_link, NotificationSender};
use crate::shared::{AuthenticatedUser, PublicUser, DEFAULT_ROLE};

/// Message returned by forgot-password in every non-error case
pub const RESET_REQUESTED_MESSAGE: &str =
    "If an account with that email exists, a password reset link has been sent.";

/// A validated registration request
#[derive(Debug, Clone)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// A validated login request
#[derive(Debug, Clone)]
pub struct LoginAttempt {
    pub email: String,
    pub password: String,
    /// Role the caller wants to log in as
    pub login_type: String,
}

/// Registration, login, password reset and token authentication
#[derive(Clone)]
pub struct AuthService {
    stores: CredentialStores,
    tokens: TokenIssuer,
    notifier: Arc<dyn NotificationSender>,
    frontend_url: String,
}

impl AuthService {
    pub fn new(
        stores: CredentialStores,
        tokens: TokenIssuer,
        notifier: Arc<dyn NotificationSender>,
        frontend_url: impl Into<String>,
    ) -> Self {
        Self {
            stores,
            tokens,
            notifier,
            frontend_url: frontend_url.into(),
        }
    }

    pub fn stores(&self) -> &CredentialStores {
        &self.stores
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    fn session_token(&self, user_id: Uuid) -> Result<String, BackendError> {
        self.tokens
            .issue_session(user_id)
            .map_err(|e| BackendError::internal(format!("Failed to create token: {}", e)))
    }

    /// Create an account and return it with a session token
    pub async fn register(&self, registration: Registration) -> Result<AuthResponse, BackendError> {
        let primary = self.stores.primary();

        if primary.find_by_email(&registration.email).await?.is_some() {
            tracing::warn!("Email already exists: {}", registration.email);
            return Err(BackendError::conflict("Email already registered"));
        }

        let password_hash = hash_password(&registration.password)
            .map_err(|e| BackendError::internal(format!("Failed to hash password: {}", e)))?;

        let name = format!("{} {}", registration.first_name, registration.last_name);
        let new_user = NewUser {
            first_name: registration.first_name,
            last_name: registration.last_name,
            name,
            email: registration.email,
            phone: registration.phone,
            password_hash,
            role: DEFAULT_ROLE.to_string(),
        };

        let user = match primary.insert(new_user).await {
            Ok(user) => user,
            Err(StoreError::Duplicate { email }) => {
                tracing::warn!("Email registered concurrently: {}", email);
                return Err(BackendError::conflict("Email already registered"));
            }
            Err(e) => return Err(e.into()),
        };

        let _ = self.stores.mirror_write(&user).await;

        let token = self.session_token(user.id)?;

        tracing::info!(user_id = %user.id, "User registered: {}", user.email);

        Ok(AuthResponse {
            user: PublicUser::from(&user),
            token,
        })
    }

    /// Check credentials and role, and return a session token
    pub async fn login(&self, attempt: LoginAttempt) -> Result<AuthResponse, BackendError> {
        let user = self
            .stores
            .primary()
            .find_by_email(&attempt.email)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Login failed, unknown email: {}", attempt.email);
                BackendError::InvalidCredentials
            })?;

        let valid = verify_password(&attempt.password, &user.password_hash).map_err(|e| {
            BackendError::internal(format!("Password verification error: {}", e))
        })?;

        if !valid {
            tracing::warn!("Login failed, wrong password: {}", attempt.email);
            return Err(BackendError::InvalidCredentials);
        }

        if user.role != attempt.login_type {
            tracing::warn!(
                user_id = %user.id,
                "Role mismatch: account is {}, requested {}",
                user.role,
                attempt.login_type
            );
            return Err(BackendError::forbidden(format!(
                "You are not authorized to login as {}",
                attempt.login_type
            )));
        }

        let token = self.session_token(user.id)?;

        tracing::info!(user_id = %user.id, "User logged in: {}", user.email);

        Ok(AuthResponse {
            user: PublicUser::from(&user),
            token,
        })
    }

    /// Email a reset link if the account exists
    ///
    /// The reply is the same either way. Email failures are logged only.
    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, BackendError> {
        let Some(user) = self.stores.primary().find_by_email(email).await? else {
            tracing::info!("Password reset requested for unknown email");
            return Ok(MessageResponse::new(RESET_REQUESTED_MESSAGE));
        };

        let reset_token = self
            .tokens
            .issue_reset(user.id)
            .map_err(|e| BackendError::internal(format!("Failed to create reset token: {}", e)))?;

        let link = reset_link(&self.frontend_url, &reset_token);

        match self.notifier.send(password_reset_email(&user.email, &link)).await {
            Ok(()) => tracing::info!(user_id = %user.id, "Password reset email sent"),
            Err(e) => tracing::error!(user_id = %user.id, "Email sending failed: {}", e),
        }

        Ok(MessageResponse::new(RESET_REQUESTED_MESSAGE))
    }

    /// Resolve a bearer token to the user it was issued for
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, BackendError> {
        let claims = self.tokens.verify(token).map_err(|e| {
            tracing::warn!("Invalid token: {}", e);
            BackendError::unauthorized("Invalid or expired token")
        })?;

        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!("Invalid user ID in token: {}", e);
            BackendError::unauthorized("Invalid or expired token")
        })?;

        let user = self
            .stores
            .primary()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Token for unknown user: {}", user_id);
                BackendError::unauthorized("User not found")
            })?;

        Ok(AuthenticatedUser::from(user))
    }
}
