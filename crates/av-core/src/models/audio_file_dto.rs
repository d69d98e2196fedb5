use crate::AudioFile;

use serde::{Deserialize, Serialize};

/// Audio file DTO for JSON serialization
#[derive(Debug, Serialize, Deserialize)]
pub struct AudioFileDto {
    pub id: String,
    pub filename: String,
    pub filepath: String,
    pub created_at: i64,
}

impl From<AudioFile> for AudioFileDto {
    fn from(f: AudioFile) -> Self {
        Self {
            id: f.id.to_string(),
            filename: f.filename,
            filepath: f.filepath,
            created_at: f.created_at.timestamp(),
        }
    }
}
