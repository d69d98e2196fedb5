//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes. Everything a client must not
//! learn (whether an email exists, why a token was rejected, what the
//! provider said) is logged here and replaced with a generic message.

use av_core::StoreError;
use av_db::DbError;
use av_federation::FederationError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, invalid, or expired credentials (401). One variant for
    /// every token and login failure so responses never reveal which
    /// check rejected the request.
    #[error("Unauthorized {location}")]
    Unauthorized { location: ErrorLocation },

    /// Authenticated but not allowed (403)
    #[error("Forbidden {location}")]
    Forbidden { location: ErrorLocation },

    /// Valid token whose subject no longer exists (404). Kept apart from
    /// plain NotFound because it usually means an account was deleted
    /// while a session was still live.
    #[error("Token subject {id} no longer exists {location}")]
    IdentityNotFound { id: Uuid, location: ErrorLocation },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Registration or linking against an email that is already taken (400)
    #[error("Email already registered {location}")]
    EmailTaken { location: ErrorLocation },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Upstream identity provider failure (502). The detail stays in the
    /// log; the client only learns that federated login failed.
    #[error("Federated login failed: {detail} {location}")]
    FederationFailed {
        detail: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized() -> Self {
        Self::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden() -> Self {
        Self::Forbidden {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn identity_not_found(id: Uuid) -> Self {
        Self::IdentityNotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn email_taken() -> Self {
        Self::EmailTaken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn federation_failed<S: Into<String>>(detail: S) -> Self {
        Self::FederationFailed {
            detail: detail.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        match &self {
            ApiError::Unauthorized { .. } | ApiError::Forbidden { .. } => {
                log::warn!("{}", self)
            }
            ApiError::IdentityNotFound { .. } => log::warn!("{}", self),
            _ => log::error!("{}", self),
        }

        let (status, body) = match self {
            ApiError::Unauthorized { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message: "Authentication required".into(),
                    field: None,
                },
            ),
            ApiError::Forbidden { .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "FORBIDDEN".into(),
                    message: "Insufficient privileges".into(),
                    field: None,
                },
            ),
            ApiError::IdentityNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "IDENTITY_NOT_FOUND".into(),
                    message: "Identity no longer exists".into(),
                    field: None,
                },
            ),
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::EmailTaken { .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "EMAIL_TAKEN".into(),
                    message: "Email is already registered".into(),
                    field: Some("email".into()),
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::FederationFailed { .. } => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody {
                    code: "FEDERATION_FAILED".into(),
                    message: "Federated login failed".into(),
                    field: None,
                },
            ),
            ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message: "Internal server error".into(),
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Every token failure collapses to a single 401
impl From<av_auth::AuthError> for ApiError {
    #[track_caller]
    fn from(e: av_auth::AuthError) -> Self {
        log::warn!("Token rejected: {}", e);
        ApiError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Duplicate { field, .. } if field == "email" => ApiError::EmailTaken {
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::Duplicate { field, .. } => ApiError::Validation {
                message: format!("Value for {} is already in use", field),
                field: Some(field.to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::NotFound { id, .. } => ApiError::NotFound {
                message: format!("Identity {} not found", id),
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::Backend { message, .. } => {
                log::error!("Store backend error: {}", message);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert database errors to API errors via the store mapping
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        ApiError::from(StoreError::from(e))
    }
}

impl From<FederationError> for ApiError {
    #[track_caller]
    fn from(e: FederationError) -> Self {
        match e {
            // User-actionable: the provider account's email belongs to an
            // existing local account
            FederationError::EmailConflict { .. } => ApiError::EmailTaken {
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::FederationFailed {
                detail: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// File storage failures never leak paths to clients
impl From<std::io::Error> for ApiError {
    #[track_caller]
    fn from(e: std::io::Error) -> Self {
        log::error!("File storage error: {}", e);
        ApiError::Internal {
            message: "File storage failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
