/**
 * Public User Views
 *
 * The shapes in which a user leaves the server. Neither type carries the
 * password hash; the stored record (`backend::auth::users::UserRecord`) is
 * converted into one of these before anything is serialized.
 */

use serde::{Deserialize, Serialize};

/// Role given to accounts created through registration.
pub const DEFAULT_ROLE: &str = "buyer";

/// User summary returned alongside a token by register and login
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    /// User's unique ID (UUID)
    pub id: String,
    /// Full name ("first last")
    pub name: String,
    /// User's email address
    pub email: String,
    /// Role tag ("buyer", "seller", "admin")
    pub role: String,
}

/// The user context attached to a request by the auth middleware
///
/// Returned verbatim by `GET /api/auth/verify`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_user_uses_camel_case() {
        let user = AuthenticatedUser {
            id: "id-1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            role: DEFAULT_ROLE.to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }
}
