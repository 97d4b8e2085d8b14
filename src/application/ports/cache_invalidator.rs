use async_trait::async_trait;

/// Cache tag grouping every per-file derived read.
pub const CACHE_TAG_FILES: &str = "files";
/// Cache tag grouping every per-subject derived read.
pub const CACHE_TAG_SUBJECTS: &str = "subjects";

/// Aggregate system statistics (file totals by status, byte counts).
pub const CACHE_KEY_SYSTEM_STATS: &str = "system:stats:comprehensive";
/// Subject listing with per-subject file counts.
pub const CACHE_KEY_SUBJECTS_WITH_COUNTS: &str = "subjects:with_counts";
/// Flat list of subject names.
pub const CACHE_KEY_SUBJECT_LIST: &str = "subjects:list";

/// Invalidation bus for derived read caches. Both operations are idempotent
/// and safe to call for tags or keys that hold nothing.
#[async_trait]
pub trait CacheInvalidator: Send + Sync {
    /// Drop every cache entry carrying `tag`.
    async fn invalidate_tag(&self, tag: &str);

    /// Drop the entry stored under `key`, if any.
    async fn invalidate_key(&self, key: &str);
}

/// Read/write view of the same cache, used by the read-through use cases.
/// Values are JSON so read models of different shapes share one store.
#[async_trait]
pub trait CacheStore: CacheInvalidator {
    async fn get(&self, key: &str) -> Option<serde_json::Value>;

    async fn put(&self, key: &str, value: serde_json::Value, tags: &[&str]);
}
