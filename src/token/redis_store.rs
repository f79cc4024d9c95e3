//! Redis-backed token store.
//!
//! Tokens live at `{prefix}:{recipient_id}` as plain strings, written by the
//! registration flow of the mobile backend. This store only reads them.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use super::{DeviceToken, TokenStore, TokenStoreError, TokenStoreResult};

pub struct RedisTokenStore {
    connection: ConnectionManager,
    key_prefix: String,
}

impl RedisTokenStore {
    /// Connect to Redis and build a store reading from `{key_prefix}:{id}`
    pub async fn connect(url: &str, key_prefix: &str) -> Result<Self, TokenStoreError> {
        let client = redis::Client::open(url)
            .map_err(|e| TokenStoreError::Unavailable(e.to_string()))?;
        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| TokenStoreError::Unavailable(e.to_string()))?;

        Ok(Self {
            connection,
            key_prefix: key_prefix.to_string(),
        })
    }

    fn key(&self, recipient_id: &str) -> String {
        token_key(&self.key_prefix, recipient_id)
    }
}

/// Key layout shared with the token registration flow
fn token_key(prefix: &str, recipient_id: &str) -> String {
    format!("{prefix}:{recipient_id}")
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn token_for(&self, recipient_id: &str) -> TokenStoreResult<Option<DeviceToken>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn
            .get(self.key(recipient_id))
            .await
            .map_err(|e| TokenStoreError::Unavailable(e.to_string()))?;

        Ok(value.map(DeviceToken::new))
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
