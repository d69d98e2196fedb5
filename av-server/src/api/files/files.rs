//! Audio file REST API handlers.
//!
//! Uploads land under a server-generated name (uuid + original
//! extension) so a request can never choose its own path on disk.
//! Ownership is the `owner_id` column; listing filters by it.

use crate::api::extractors::current_identity::CurrentIdentity;
use crate::{ApiError, ApiResult, AppState, AudioFileListResponse, AudioFileResponse};

use av_core::{AudioFile, AudioFileDto};
use av_db::AudioFileRepository;

use std::path::Path as FsPath;

use axum::{
    Json,
    extract::{Multipart, State},
};
use log::info;
use uuid::Uuid;

/// Generated on-disk name: uuid, plus the original extension when there
/// is one
fn stored_name(original: &str) -> String {
    match FsPath::new(original).extension() {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext.to_string_lossy()),
        None => Uuid::new_v4().to_string(),
    }
}

/// POST /api/v1/files (multipart, field name "file")
pub async fn upload_file(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    mut multipart: Multipart,
) -> ApiResult<Json<AudioFileResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("failed to read upload: {}", e)))?;

        let filepath = state.upload_dir.join(stored_name(&original));
        tokio::fs::create_dir_all(&state.upload_dir).await?;
        tokio::fs::write(&filepath, &data).await?;

        let record = AudioFile::new(
            original,
            filepath.to_string_lossy().into_owned(),
            identity.id,
        );

        let repo = AudioFileRepository::new(state.pool.clone());
        repo.create(&record).await?;

        info!(
            "Stored upload {} ({} bytes) for identity {}",
            record.id,
            data.len(),
            identity.id
        );

        return Ok(Json(AudioFileResponse {
            audio_file: AudioFileDto::from(record),
        }));
    }

    Err(ApiError::validation("missing \"file\" field", Some("file")))
}

/// GET /api/v1/files
pub async fn list_files(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> ApiResult<Json<AudioFileListResponse>> {
    let repo = AudioFileRepository::new(state.pool.clone());
    let files = repo.find_by_owner(identity.id).await?;

    Ok(Json(AudioFileListResponse {
        audio_files: files.into_iter().map(AudioFileDto::from).collect(),
    }))
}
