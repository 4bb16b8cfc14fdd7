//! Notification Module
//!
//! Outbound email for the password-reset flow. The auth service talks to the
//! `NotificationSender` trait; the server wires in `SmtpNotifier` when SMTP
//! is configured and `DisabledNotifier` otherwise.
//!
//! Send failures are never surfaced to HTTP callers. The auth service logs
//! them and carries on.

use async_trait::async_trait;
use thiserror::Error;

/// SMTP transport
pub mod smtp;

pub use smtp::SmtpNotifier;

/// Subject line of the reset email
pub const RESET_SUBJECT: &str = "Password Reset Request";

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// No transport is configured
    #[error("email transport not configured")]
    NotConfigured,

    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// A multipart (plaintext + HTML) email ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Something that can deliver an `OutgoingEmail`
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), NotifyError>;
}

/// Sender used when no SMTP relay is configured; every send fails
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledNotifier;

#[async_trait]
impl NotificationSender for DisabledNotifier {
    async fn send(&self, _email: OutgoingEmail) -> Result<(), NotifyError> {
        Err(NotifyError::NotConfigured)
    }
}

/// Build the reset link `{frontend_url}/reset-password?token={token}`
pub fn reset_link(frontend_url: &str, token: &str) -> String {
    format!(
        "{}/reset-password?token={}",
        frontend_url.trim_end_matches('/'),
        token
    )
}

/// Build the password-reset email for `to`
pub fn password_reset_email(to: &str, link: &str) -> OutgoingEmail {
    OutgoingEmail {
        to: to.to_string(),
        subject: RESET_SUBJECT.to_string(),
        text_body: format!("Click the link to reset your password: {}", link),
        html_body: format!(
            "<p>Click <a href=\"{}\">here</a> to reset your password.</p>",
            link
        ),
    }
}
