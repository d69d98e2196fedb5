/// External provider endpoints and client credentials.
///
/// Built once at startup (the server converts its own config section into
/// this) and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub authorize_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    pub timeout_secs: u64,
}
