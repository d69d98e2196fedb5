use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_SECS};

use serde::Deserialize;

const MIN_JWT_SECRET_BYTES: usize = 32;
const MAX_TOKEN_TTL_SECS: i64 = 30 * 24 * 3600;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; no default is generated so a
    /// restart never silently invalidates outstanding tokens.
    pub jwt_secret: Option<String>,
    /// Session token lifetime
    pub token_ttl_secs: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set AV_AUTH_JWT_SECRET or config.toml)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_BYTES => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} bytes, got {}",
                    MIN_JWT_SECRET_BYTES,
                    secret.len()
                )));
            }
            Some(_) => {}
        }

        if self.token_ttl_secs <= 0 || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be 1-{}, got {}",
                MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        Ok(())
    }
}
