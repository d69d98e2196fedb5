use av_core::StoreError;
use error_location::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated on {field} {location}")]
    UniqueViolation {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Row for {entity} {id} not found {location}")]
    RowNotFound {
        entity: &'static str,
        id: uuid::Uuid,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Map database failures onto the abstract store contract
impl From<DbError> for StoreError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::UniqueViolation { field, .. } => StoreError::duplicate(field),
            DbError::RowNotFound { id, .. } => StoreError::not_found(id),
            other => StoreError::backend(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
