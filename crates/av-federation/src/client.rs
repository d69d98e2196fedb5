//! OAuth authorization-code client for the external identity provider.
//!
//! One login attempt walks: authorize URL -> code exchange -> profile
//! fetch. No step is retried internally; the authorization code is
//! single-use, so a retry would fail identically. Transient failures
//! surface to the caller as [`FederationError`] for the request layer to
//! decide.

use crate::{FederatedProfile, FederationError, ProviderConfig, Result as FederationResult};

use std::time::Duration;

use reqwest::Client as ReqwestClient;
use serde::Deserialize;

/// Provider access token from the code exchange
#[derive(Debug, Clone)]
pub struct ProviderToken {
    pub access_token: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

// Yandex ID userinfo field names
#[derive(Deserialize)]
struct UserInfoResponse {
    id: String,
    default_email: Option<String>,
    real_name: Option<String>,
}

pub struct FederationClient {
    http: ReqwestClient,
    config: ProviderConfig,
}

impl FederationClient {
    /// Create a client with a bounded request timeout. A provider timeout
    /// surfaces as the same error as any other provider failure.
    pub fn new(config: ProviderConfig) -> FederationResult<Self> {
        let http = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FederationError::exchange(format!("HTTP client build failed: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Build the provider's authorization URL for the browser redirect
    pub fn authorize_url(&self) -> FederationResult<String> {
        let url = reqwest::Url::parse_with_params(
            &self.config.authorize_url,
            &[
                ("response_type", "code"),
                ("client_id", self.config.client_id.as_str()),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ],
        )
        .map_err(|e| FederationError::exchange(format!("Invalid authorize URL: {}", e)))?;

        Ok(url.into())
    }

    /// Exchange an authorization code for a provider access token.
    /// The code is single-use: this is never retried.
    pub async fn exchange_code(&self, code: &str) -> FederationResult<ProviderToken> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| FederationError::exchange(format!("token request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FederationError::exchange(format!(
                "provider returned {}",
                status
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| FederationError::exchange(format!("malformed token response: {}", e)))?;

        Ok(ProviderToken {
            access_token: body.access_token,
        })
    }

    /// Fetch the federated profile with a provider access token
    pub async fn fetch_profile(&self, token: &ProviderToken) -> FederationResult<FederatedProfile> {
        let response = self
            .http
            .post(&self.config.userinfo_url)
            .header("Authorization", format!("OAuth {}", token.access_token))
            .send()
            .await
            .map_err(|e| FederationError::profile(format!("userinfo request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FederationError::profile(format!(
                "provider returned {}",
                status
            )));
        }

        let body: UserInfoResponse = response
            .json()
            .await
            .map_err(|e| FederationError::profile(format!("malformed userinfo response: {}", e)))?;

        // An email is required for reconciliation
        let email = body
            .default_email
            .ok_or_else(|| FederationError::profile("profile carries no email"))?;

        Ok(FederatedProfile {
            id: body.id,
            email,
            display_name: body.real_name,
        })
    }
}
