use std::sync::Arc;
use tracing::debug;

use crate::application::ports::cache_invalidator::{CACHE_KEY_SYSTEM_STATS, CACHE_TAG_FILES};
use crate::application::ports::CacheStore;
use crate::domain::repositories::file_repository::{
    FileRepository, FileRepositoryError, FileStats,
};

#[derive(Debug)]
pub enum SystemStatsError {
    RepositoryError(String),
}

impl std::fmt::Display for SystemStatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemStatsError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for SystemStatsError {}

impl From<FileRepositoryError> for SystemStatsError {
    fn from(error: FileRepositoryError) -> Self {
        SystemStatsError::RepositoryError(error.to_string())
    }
}

/// Aggregate statistics, read through the cache under the well-known system
/// stats key.
pub struct SystemStatsUseCase {
    file_repository: Arc<dyn FileRepository>,
    cache: Arc<dyn CacheStore>,
}

impl SystemStatsUseCase {
    pub fn new(file_repository: Arc<dyn FileRepository>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            file_repository,
            cache,
        }
    }

    pub async fn execute(&self) -> Result<FileStats, SystemStatsError> {
        if let Some(cached) = self.cache.get(CACHE_KEY_SYSTEM_STATS).await {
            if let Ok(stats) = serde_json::from_value::<FileStats>(cached) {
                debug!("System stats served from cache");
                return Ok(stats);
            }
        }

        let stats = self.file_repository.stats().await?;
        if let Ok(value) = serde_json::to_value(&stats) {
            self.cache
                .put(CACHE_KEY_SYSTEM_STATS, value, &[CACHE_TAG_FILES])
                .await;
        }
        Ok(stats)
    }
}
