use std::env;

use auth::AuthSecrets;
use auth::SecretError;
use auth::TokenLifetimes;
use chrono::Duration;
use chrono::Utc;
use config::builder::DefaultState;
use config::Config as ConfigSource;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_expiration_minutes: i64,
    pub refresh_expiration_hours: i64,
}

impl JwtConfig {
    /// Signing secrets for both token kinds.
    ///
    /// # Errors
    /// * `SecretError` - A secret is empty or both secrets are equal
    pub fn secrets(&self) -> Result<AuthSecrets, SecretError> {
        AuthSecrets::new(self.access_secret.clone(), self.refresh_secret.clone())
    }

    /// Validity windows of both token kinds.
    ///
    /// # Errors
    /// * `ConfigError::Message` - A lifetime is not positive, or is too large
    ///   to add to the current time
    pub fn lifetimes(&self) -> Result<TokenLifetimes, ConfigError> {
        Ok(TokenLifetimes::new(
            lifetime(
                "jwt.access_expiration_minutes",
                self.access_expiration_minutes,
                Duration::try_minutes,
            )?,
            lifetime(
                "jwt.refresh_expiration_hours",
                self.refresh_expiration_hours,
                Duration::try_hours,
            )?,
        ))
    }
}

fn lifetime(
    key: &str,
    value: i64,
    unit: fn(i64) -> Option<Duration>,
) -> Result<Duration, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::Message(format!(
            "{key} must be positive, got {value}"
        )));
    }

    unit(value)
        .filter(|duration| Utc::now().checked_add_signed(*duration).is_some())
        .ok_or_else(|| ConfigError::Message(format!("{key} is out of range: {value}")))
}

// Keeps secrets out of the startup log.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &"[redacted]")
            .field("refresh_secret", &"[redacted]")
            .field("access_expiration_minutes", &self.access_expiration_minutes)
            .field("refresh_expiration_hours", &self.refresh_expiration_hours)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__ACCESS_SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults (port, pool size, token lifetimes)
    ///
    /// The signing secrets have no default; a missing secret fails here.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__ACCESS_SECRET=... overrides jwt.access_secret
            .add_source(Environment::default().separator("__").try_parsing(true));

        Self::build(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        ConfigSource::builder()
            .set_default("server.http_port", 8080)?
            .set_default("database.max_connections", 5)?
            .set_default("jwt.access_expiration_minutes", 15)?
            .set_default("jwt.refresh_expiration_hours", 24)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
