use av_core::AudioFileDto;

use serde::Serialize;

/// Single uploaded file response
#[derive(Debug, Serialize)]
pub struct AudioFileResponse {
    pub audio_file: AudioFileDto,
}
