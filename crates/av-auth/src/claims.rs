use serde::{Deserialize, Serialize};

/// Session token claims.
///
/// The subject is the only identity-bearing value a token carries;
/// validity is purely a function of signature and expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity id)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}
