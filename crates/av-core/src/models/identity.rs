//! Identity entity - one user account, local or federated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted user identity.
///
/// `id` is generated at creation and never changes; it is the only value
/// embedded in session tokens. `email` is unique across all identities.
/// `federated_id` is the external provider's user id, unique when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub federated_id: Option<String>,
    /// Argon2 PHC string. Federated-only accounts carry a generated
    /// placeholder hash that never verifies against a typed password.
    pub password_hash: Option<String>,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new local identity with default values
    pub fn new_local(email: String, display_name: Option<String>, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            display_name,
            federated_id: None,
            password_hash: Some(password_hash),
            is_superuser: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new identity for a federated profile
    pub fn new_federated(
        federated_id: String,
        email: String,
        display_name: Option<String>,
        placeholder_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            display_name,
            federated_id: Some(federated_id),
            password_hash: Some(placeholder_hash),
            is_superuser: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this identity came from a federated login
    pub fn is_federated(&self) -> bool {
        self.federated_id.is_some()
    }
}
