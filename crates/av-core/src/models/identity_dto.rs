use crate::Identity;

use serde::{Deserialize, Serialize};

/// Identity DTO for JSON serialization.
/// Never carries the password hash or the raw federated id.
#[derive(Debug, Serialize, Deserialize)]
pub struct IdentityDto {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub is_superuser: bool,
    pub federated: bool,
    pub created_at: i64,
}

impl From<Identity> for IdentityDto {
    fn from(i: Identity) -> Self {
        Self {
            id: i.id.to_string(),
            federated: i.federated_id.is_some(),
            email: i.email,
            display_name: i.display_name,
            is_superuser: i.is_superuser,
            created_at: i.created_at.timestamp(),
        }
    }
}
