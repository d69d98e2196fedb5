use serde::Serialize;

/// Provider authorization URL for the browser redirect
#[derive(Debug, Serialize)]
pub struct AuthorizeResponse {
    pub auth_url: String,
}
