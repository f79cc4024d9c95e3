//! Recipient token lookup.
//!
//! Resolves a recipient id to the push token registered for their device.
//! Lookup is read-only; token registration and refresh happen elsewhere.

mod memory;
mod redis_store;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryTokenStore;
pub use redis_store::RedisTokenStore;

use crate::config::TokenStoreConfig;

/// Opaque push token for a recipient device.
///
/// The value is deliberately hidden from `Debug` output so tokens never end
/// up in logs or error messages.
#[derive(Clone, PartialEq, Eq)]
pub struct DeviceToken(String);

impl DeviceToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DeviceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DeviceToken(***)")
    }
}

impl From<String> for DeviceToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Error type for token store operations.
///
/// "No token on file" is not an error; it is the `Ok(None)` case. An error
/// here means the store itself could not answer.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("token store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for token store operations
pub type TokenStoreResult<T> = Result<T, TokenStoreError>;

/// Read-only lookup of the push token registered for a recipient
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Resolve a recipient id to their device token, if one is on file
    async fn token_for(&self, recipient_id: &str) -> TokenStoreResult<Option<DeviceToken>>;

    /// Name of the backing store, for health reporting
    fn backend_name(&self) -> &'static str;
}

/// Create a token store based on configuration.
///
/// - `"redis"`: connects to the configured Redis instance
/// - `"memory"` (default): in-process store, useful for development and tests
///
/// An unrecognized backend name falls back to memory with a warning.
pub async fn create_token_store(config: &TokenStoreConfig) -> anyhow::Result<Arc<dyn TokenStore>> {
    match config.backend.as_str() {
        "redis" => {
            tracing::info!(
                backend = "redis",
                prefix = %config.key_prefix,
                "Creating Redis token store"
            );
            let store = RedisTokenStore::connect(&config.redis_url, &config.key_prefix).await?;
            Ok(Arc::new(store))
        }
        "memory" => {
            tracing::info!(backend = "memory", "Creating in-memory token store");
            Ok(Arc::new(MemoryTokenStore::new()))
        }
        other => {
            tracing::warn!(
                backend = %other,
                "Unknown token store backend, falling back to memory"
            );
            Ok(Arc::new(MemoryTokenStore::new()))
        }
    }
}
