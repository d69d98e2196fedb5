pub mod error;
pub mod models;
pub mod store;

pub use error::error_location::ErrorLocation;
pub use error::{CoreError, Result};
pub use models::audio_file::AudioFile;
pub use models::audio_file_dto::AudioFileDto;
pub use models::identity::Identity;
pub use models::identity_dto::IdentityDto;
pub use models::identity_patch::IdentityPatch;
pub use store::{IdentityStore, StoreError, StoreResult};

#[cfg(test)]
mod tests;
