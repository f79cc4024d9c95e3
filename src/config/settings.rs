use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub token_store: TokenStoreConfig,
    #[serde(default)]
    pub fcm: FcmConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenStoreConfig {
    /// "memory" or "redis"
    #[serde(default = "default_token_backend")]
    pub backend: String,
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
    /// Redis keys are `{key_prefix}:{recipient_id}`
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FcmConfig {
    /// When false, notifications are logged instead of sent
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub project_id: String,
    /// Pre-minted OAuth bearer token for the FCM v1 API
    #[serde(default)]
    pub access_token: String,
    /// Full endpoint override, mainly for tests against a local stub
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_fcm_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// When set, notification endpoints require a matching X-API-Key header
    pub key: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_token_backend() -> String {
    "memory".to_string()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_key_prefix() -> String {
    "push:tokens".to_string()
}

fn default_fcm_timeout() -> u64 {
    10
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8082)?
            .set_default("token_store.backend", "memory")?
            .set_default("token_store.redis_url", "redis://localhost:6379")?
            .set_default("token_store.key_prefix", "push:tokens")?
            .set_default("fcm.enabled", false)?
            .set_default("fcm.timeout_seconds", 10)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // SERVER_HOST, SERVER_PORT, FCM_PROJECT_ID, FCM_ACCESS_TOKEN, etc.
            .add_source(
                Environment::default()
                    .separator("_")
                    .try_parsing(true)
                    .list_separator(","),
            );

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

impl Default for TokenStoreConfig {
    fn default() -> Self {
        Self {
            backend: default_token_backend(),
            redis_url: default_redis_url(),
            key_prefix: default_key_prefix(),
        }
    }
}

impl Default for FcmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            project_id: String::new(),
            access_token: String::new(),
            endpoint: None,
            timeout_seconds: default_fcm_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8082);

        let tokens = TokenStoreConfig::default();
        assert_eq!(tokens.backend, "memory");
        assert_eq!(tokens.key_prefix, "push:tokens");

        let fcm = FcmConfig::default();
        assert!(!fcm.enabled);
        assert_eq!(fcm.timeout_seconds, 10);
    }
}
