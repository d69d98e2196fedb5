use error_location::ErrorLocation;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token signature {location}")]
    InvalidSignature { location: ErrorLocation },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Malformed subject claim: {message} {location}")]
    MalformedSubject {
        message: String,
        location: ErrorLocation,
    },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Token encoding failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
