use av_core::StoreError;
use error_location::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FederationError {
    #[error("Authorization-code exchange failed: {message} {location}")]
    Exchange {
        message: String,
        location: ErrorLocation,
    },

    #[error("Federated profile fetch failed: {message} {location}")]
    Profile {
        message: String,
        location: ErrorLocation,
    },

    /// The provider's email claim matches an existing account that is not
    /// linked to this federated id. Silent merging is refused.
    #[error("Federated email already belongs to an existing account {location}")]
    EmailConflict { location: ErrorLocation },

    #[error("Identity store error during reconciliation: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Placeholder credential generation failed: {source} {location}")]
    Credential {
        #[source]
        source: av_auth::AuthError,
        location: ErrorLocation,
    },
}

impl FederationError {
    #[track_caller]
    pub fn exchange<S: Into<String>>(message: S) -> Self {
        Self::Exchange {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile<S: Into<String>>(message: S) -> Self {
        Self::Profile {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn email_conflict() -> Self {
        Self::EmailConflict {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for FederationError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<av_auth::AuthError> for FederationError {
    #[track_caller]
    fn from(source: av_auth::AuthError) -> Self {
        Self::Credential {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, FederationError>;
