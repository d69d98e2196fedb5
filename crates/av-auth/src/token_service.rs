use crate::{AuthError, Claims, Result as AuthErrorResult};

use error_location::ErrorLocation;

use std::panic::Location;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Default session lifetime: 1 hour
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Issues and validates signed session tokens (HS256).
///
/// Constructed once at startup from the process-wide secret and read-only
/// afterwards. There is no server-side token store: logout is "let it
/// expire".
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    refresh_validation: Validation,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Zero leeway: a token issued with ttl = 0 must deterministically
        // fail validation on the very next clock tick.
        validation.leeway = 0;

        // Refresh accepts a correctly signed token even after expiry.
        // Explicit policy, see refresh() below.
        let mut refresh_validation = Validation::new(Algorithm::HS256);
        refresh_validation.validate_exp = false;
        refresh_validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            refresh_validation,
            ttl_secs,
        }
    }

    /// Issue a token for `subject` with the configured TTL
    #[track_caller]
    pub fn issue(&self, subject: Uuid) -> AuthErrorResult<String> {
        self.issue_with_ttl(subject, self.ttl_secs)
    }

    /// Issue a token for `subject` expiring `ttl_secs` from now
    #[track_caller]
    pub fn issue_with_ttl(&self, subject: Uuid, ttl_secs: i64) -> AuthErrorResult<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp: now + ttl_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::TokenEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Validate a token and return its subject.
    ///
    /// Signature integrity is checked first, then expiry, then the
    /// subject claim is parsed as an identity id.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Uuid> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| Self::map_decode_error(e))?;

        Self::parse_subject(&token_data.claims)
    }

    /// Validate signature and subject, then issue a fresh token.
    ///
    /// Policy: expiry is NOT checked on the incoming token, so a correctly
    /// signed but already-expired token can still be refreshed. Tightening
    /// this means swapping `refresh_validation` for `validation`.
    #[track_caller]
    pub fn refresh(&self, token: &str) -> AuthErrorResult<String> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.refresh_validation)
            .map_err(|e| Self::map_decode_error(e))?;

        let subject = Self::parse_subject(&token_data.claims)?;
        self.issue(subject)
    }

    #[track_caller]
    fn parse_subject(claims: &Claims) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&claims.sub).map_err(|e| AuthError::MalformedSubject {
            message: format!("sub is not a valid identity id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn map_decode_error(e: jsonwebtoken::errors::Error) -> AuthError {
        use jsonwebtoken::errors::ErrorKind;
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            },
            ErrorKind::InvalidSignature => AuthError::InvalidSignature {
                location: ErrorLocation::from(Location::caller()),
            },
            _ => AuthError::JwtDecode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}
