mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod oauth_config;
mod server_config;
mod storage_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use oauth_config::OAuthConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_FILENAME: &str = "audio_vault.db";
const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;
const DEFAULT_UPLOAD_DIRECTORY: &str = "uploads";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_OAUTH_AUTHORIZE_URL: &str = "https://oauth.yandex.ru/authorize";
const DEFAULT_OAUTH_TOKEN_URL: &str = "https://oauth.yandex.ru/token";
const DEFAULT_OAUTH_USERINFO_URL: &str = "https://login.yandex.ru/info";
const DEFAULT_OAUTH_TIMEOUT_SECS: u64 = 10;

#[cfg(test)]
mod tests;
