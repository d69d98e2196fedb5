pub mod audio_file_repository;
pub mod identity_repository;
