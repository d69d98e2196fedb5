use av_core::AudioFileDto;

use serde::Serialize;

/// Files owned by the caller
#[derive(Debug, Serialize)]
pub struct AudioFileListResponse {
    pub audio_files: Vec<AudioFileDto>,
}
