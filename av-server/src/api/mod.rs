pub mod auth;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod federation;
pub mod files;
pub mod identities;
