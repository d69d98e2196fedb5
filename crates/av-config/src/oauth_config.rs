use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_OAUTH_AUTHORIZE_URL, DEFAULT_OAUTH_TIMEOUT_SECS,
    DEFAULT_OAUTH_TOKEN_URL, DEFAULT_OAUTH_USERINFO_URL,
};

use serde::Deserialize;

/// External identity provider settings (OAuth authorization-code client).
///
/// Endpoint defaults target Yandex ID; overriding them points the
/// federation client at another provider or a test double.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OAuthConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub authorize_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    /// Bound on provider round trips; a timeout surfaces as the same
    /// error as any other provider failure.
    pub timeout_secs: u64,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            redirect_uri: None,
            authorize_url: String::from(DEFAULT_OAUTH_AUTHORIZE_URL),
            token_url: String::from(DEFAULT_OAUTH_TOKEN_URL),
            userinfo_url: String::from(DEFAULT_OAUTH_USERINFO_URL),
            timeout_secs: DEFAULT_OAUTH_TIMEOUT_SECS,
        }
    }
}

impl OAuthConfig {
    /// Federated login is optional; it is enabled by configuring a client id
    pub fn enabled(&self) -> bool {
        self.client_id.is_some()
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled() {
            return Ok(());
        }

        if self.client_secret.is_none() {
            return Err(ConfigError::oauth(
                "oauth.client_secret is required when oauth.client_id is set",
            ));
        }

        if self.redirect_uri.is_none() {
            return Err(ConfigError::oauth(
                "oauth.redirect_uri is required when oauth.client_id is set",
            ));
        }

        for (name, url) in [
            ("oauth.authorize_url", &self.authorize_url),
            ("oauth.token_url", &self.token_url),
            ("oauth.userinfo_url", &self.userinfo_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::oauth(format!(
                    "{} must be an http(s) URL, got {}",
                    name, url
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::oauth("oauth.timeout_secs must be > 0"));
        }

        Ok(())
    }
}
