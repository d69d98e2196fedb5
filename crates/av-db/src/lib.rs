pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::audio_file_repository::AudioFileRepository;
pub use repositories::identity_repository::IdentityRepository;
