//! Audio file repository - ownership queries by foreign-key value.

use crate::{DbError, Result as DbErrorResult};

use av_core::AudioFile;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct AudioFileRepository {
    pool: SqlitePool,
}

impl AudioFileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, file: &AudioFile) -> DbErrorResult<()> {
        let id = file.id.to_string();
        let owner_id = file.owner_id.to_string();
        let created_at = file.created_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO audio_files (id, filename, filepath, owner_id, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&file.filename)
        .bind(&file.filepath)
        .bind(&owner_id)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_owner(&self, owner_id: Uuid) -> DbErrorResult<Vec<AudioFile>> {
        let owner_str = owner_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT id, filename, filepath, owner_id, created_at
                FROM audio_files
                WHERE owner_id = ?
                ORDER BY created_at
            "#,
        )
        .bind(&owner_str)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_audio_file).collect()
    }
}

fn row_to_audio_file(r: &SqliteRow) -> DbErrorResult<AudioFile> {
    let id: String = r.try_get("id")?;
    let owner_id: String = r.try_get("owner_id")?;
    let created_at: i64 = r.try_get("created_at")?;

    Ok(AudioFile {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in audio_file.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        filename: r.try_get("filename")?,
        filepath: r.try_get("filepath")?,
        owner_id: Uuid::parse_str(&owner_id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in audio_file.owner_id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in audio_file.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
