/**
 * Password Hashing
 *
 * Thin wrappers around bcrypt so the cost factor lives in one place.
 */

use bcrypt::BcryptError;

/// bcrypt cost used for every stored credential.
pub const PASSWORD_HASH_COST: u32 = 10;

/// Hash a plaintext password for storage
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, PASSWORD_HASH_COST)
}

/// Check a plaintext password against a stored hash
///
/// bcrypt compares in constant time.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(password, password_hash)
}
