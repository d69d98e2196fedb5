//! Password hashing and verification (argon2id).

use crate::{AuthError, Result as AuthErrorResult};

use error_location::ErrorLocation;

use std::panic::Location;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Hash a password with a freshly generated salt.
/// Output is a PHC string encoding algorithm, salt and digest.
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Verify a password against a stored hash.
///
/// A mismatch is a normal `false`, not an error. A malformed stored hash
/// is logged and also reported as `false`: the account must stay
/// recoverable through other means, so this never becomes fatal.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(h) => h,
        Err(e) => {
            log::warn!("Malformed stored password hash, treating as verification failure: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Generate the unusable placeholder hash given to federated-only
/// accounts. The plaintext is random and discarded, so nothing ever
/// verifies against it.
#[track_caller]
pub fn generate_placeholder_hash() -> AuthErrorResult<String> {
    let throwaway: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(48)
        .map(char::from)
        .collect();

    hash_password(&throwaway)
}
