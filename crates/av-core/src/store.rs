//! Abstract persistence contract for identities.
//!
//! The store is the only shared mutable resource in the system. Uniqueness
//! of `email` and `federated_id` is enforced HERE (unique constraints in
//! the backing database), not by callers: two concurrent creations racing
//! on the same key must leave exactly one winner, and the loser surfaces
//! as [`StoreError::Duplicate`].

use crate::{ErrorLocation, Identity, IdentityPatch};

use std::panic::Location;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unique constraint violated on {field} {location}")]
    Duplicate {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Identity {id} not found {location}")]
    NotFound { id: Uuid, location: ErrorLocation },

    #[error("Store backend error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn duplicate(field: &'static str) -> Self {
        Self::Duplicate {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Lookup/create/update of identity records.
///
/// All three lookups must stay consistent: if more than one key matches,
/// they resolve to the same record.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Identity>>;

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Identity>>;

    async fn find_by_federated_id(&self, federated_id: &str) -> StoreResult<Option<Identity>>;

    async fn insert(&self, identity: &Identity) -> StoreResult<()>;

    /// Apply a partial update; absent patch fields are left untouched.
    /// Returns the updated record.
    async fn update(&self, id: Uuid, patch: &IdentityPatch) -> StoreResult<Identity>;

    /// Attach a federated id to an existing identity (explicit account
    /// linking). Fails with `Duplicate` if the id is already claimed.
    async fn attach_federated_id(&self, id: Uuid, federated_id: &str) -> StoreResult<Identity>;

    async fn delete(&self, id: Uuid) -> StoreResult<()>;
}
