pub mod audio_file;
pub mod audio_file_dto;
pub mod identity;
pub mod identity_dto;
pub mod identity_patch;
