//! Audio file record - ownership is the foreign-key value, resolved by query.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFile {
    pub id: Uuid,
    /// User-facing name, defaults to the uploaded filename
    pub filename: String,
    /// Path on disk, generated by the server
    pub filepath: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl AudioFile {
    pub fn new(filename: String, filepath: String, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename,
            filepath,
            owner_id,
            created_at: Utc::now(),
        }
    }
}
