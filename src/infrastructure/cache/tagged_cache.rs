use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::ports::{CacheInvalidator, CacheStore};

struct CacheEntry {
    value: serde_json::Value,
    tags: Vec<String>,
}

/// Process-wide cache for derived reads (subject listings, statistics),
/// addressable by exact key or by tag for bulk invalidation.
///
/// Values are stored as JSON so unrelated read models can share one cache
/// without a type parameter per entry.
#[derive(Clone)]
pub struct InMemoryTaggedCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl InMemoryTaggedCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get(&self, key: &str) -> Option<serde_json::Value> {
        let entries = self.entries.read().await;
        entries.get(key).map(|entry| entry.value.clone())
    }

    pub async fn put(&self, key: &str, value: serde_json::Value, tags: &[&str]) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                tags: tags.iter().map(|t| t.to_string()).collect(),
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for InMemoryTaggedCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheInvalidator for InMemoryTaggedCache {
    async fn invalidate_tag(&self, tag: &str) {
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| !entry.tags.iter().any(|t| t == tag));
    }

    async fn invalidate_key(&self, key: &str) {
        let mut entries = self.entries.write().await;
        entries.remove(key);
    }
}

#[async_trait]
impl CacheStore for InMemoryTaggedCache {
    async fn get(&self, key: &str) -> Option<serde_json::Value> {
        InMemoryTaggedCache::get(self, key).await
    }

    async fn put(&self, key: &str, value: serde_json::Value, tags: &[&str]) {
        InMemoryTaggedCache::put(self, key, value, tags).await
    }
}
