//! In-memory token store backed by a concurrent map.

use async_trait::async_trait;
use dashmap::DashMap;

use super::{DeviceToken, TokenStore, TokenStoreResult};

/// In-process token store. The default backend; also what the tests seed.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: DashMap<String, String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self {
            tokens: DashMap::new(),
        }
    }

    /// Register a token for a recipient, replacing any previous one
    pub fn insert(&self, recipient_id: impl Into<String>, token: impl Into<String>) {
        self.tokens.insert(recipient_id.into(), token.into());
    }

    /// Drop the token for a recipient
    pub fn remove(&self, recipient_id: &str) {
        self.tokens.remove(recipient_id);
    }

    /// Number of recipients with a token on file
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn token_for(&self, recipient_id: &str) -> TokenStoreResult<Option<DeviceToken>> {
        Ok(self
            .tokens
            .get(recipient_id)
            .map(|entry| DeviceToken::new(entry.value().clone())))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_hit_and_miss() {
        let store = MemoryTokenStore::new();
        store.insert("p1", "tok1");

        let token = store.token_for("p1").await.unwrap();
        assert_eq!(token.map(|t| t.as_str().to_string()), Some("tok1".to_string()));

        let missing = store.token_for("p2").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemoryTokenStore::new();
        store.insert("p1", "tok1");
        store.remove("p1");
        assert!(store.token_for("p1").await.unwrap().is_none());
        assert!(store.is_empty());
    }
}
