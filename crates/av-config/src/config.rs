use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, OAuthConfig,
    ServerConfig, StorageConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub oauth: OAuthConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for AV_CONFIG_DIR env var, else use ./.av/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply AV_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AV_CONFIG_DIR env var > ./.av/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("AV_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".av"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.oauth.validate()?;

        // Relative-only paths cannot escape the config dir
        for (name, path) in [
            ("database.path", &self.database.path),
            ("storage.upload_dir", &self.storage.upload_dir),
        ] {
            let p = std::path::Path::new(path);
            if p.is_absolute() || path.contains("..") {
                return Err(ConfigError::config(format!(
                    "{} must be relative and cannot contain '..'",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the upload directory.
    pub fn upload_dir(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.upload_dir))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: token ttl {}s, secret {}",
            self.auth.token_ttl_secs,
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "MISSING"
            }
        );
        info!(
            "  oauth: {} (timeout {}s)",
            if self.oauth.enabled() {
                "enabled"
            } else {
                "disabled"
            },
            self.oauth.timeout_secs
        );
        info!("  storage: {}", self.storage.upload_dir);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("AV_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("AV_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("AV_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("AV_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("AV_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);

        // OAuth
        Self::apply_env_option_string("AV_OAUTH_CLIENT_ID", &mut self.oauth.client_id);
        Self::apply_env_option_string("AV_OAUTH_CLIENT_SECRET", &mut self.oauth.client_secret);
        Self::apply_env_option_string("AV_OAUTH_REDIRECT_URI", &mut self.oauth.redirect_uri);
        Self::apply_env_string("AV_OAUTH_AUTHORIZE_URL", &mut self.oauth.authorize_url);
        Self::apply_env_string("AV_OAUTH_TOKEN_URL", &mut self.oauth.token_url);
        Self::apply_env_string("AV_OAUTH_USERINFO_URL", &mut self.oauth.userinfo_url);
        Self::apply_env_parse("AV_OAUTH_TIMEOUT_SECS", &mut self.oauth.timeout_secs);

        // Storage
        Self::apply_env_string("AV_STORAGE_UPLOAD_DIR", &mut self.storage.upload_dir);

        // Logging
        Self::apply_env_parse("AV_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AV_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("AV_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
