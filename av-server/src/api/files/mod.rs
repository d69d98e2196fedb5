pub mod audio_file_list_response;
pub mod audio_file_response;
pub mod files;
