use std::sync::Arc;
use tracing::debug;

use crate::application::ports::cache_invalidator::{
    CACHE_KEY_SUBJECT_LIST, CACHE_KEY_SUBJECTS_WITH_COUNTS, CACHE_TAG_FILES, CACHE_TAG_SUBJECTS,
};
use crate::application::ports::CacheStore;
use crate::domain::repositories::file_repository::{
    FileRepository, FileRepositoryError, SubjectCount,
};

#[derive(Debug)]
pub enum ListSubjectsError {
    RepositoryError(String),
}

impl std::fmt::Display for ListSubjectsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListSubjectsError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ListSubjectsError {}

impl From<FileRepositoryError> for ListSubjectsError {
    fn from(error: FileRepositoryError) -> Self {
        ListSubjectsError::RepositoryError(error.to_string())
    }
}

/// Subject listings, read through the cache. Entries are tagged with both
/// `files` and `subjects` so either a file-level or a subject-level change
/// drops them; the processing job and the write use cases do the dropping.
pub struct ListSubjectsUseCase {
    file_repository: Arc<dyn FileRepository>,
    cache: Arc<dyn CacheStore>,
}

impl ListSubjectsUseCase {
    pub fn new(file_repository: Arc<dyn FileRepository>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            file_repository,
            cache,
        }
    }

    pub async fn with_counts(&self) -> Result<Vec<SubjectCount>, ListSubjectsError> {
        if let Some(cached) = self.cache.get(CACHE_KEY_SUBJECTS_WITH_COUNTS).await {
            if let Ok(counts) = serde_json::from_value::<Vec<SubjectCount>>(cached) {
                debug!("Subject counts served from cache");
                return Ok(counts);
            }
        }

        let counts = self.file_repository.subjects_with_counts().await?;
        if let Ok(value) = serde_json::to_value(&counts) {
            self.cache
                .put(
                    CACHE_KEY_SUBJECTS_WITH_COUNTS,
                    value,
                    &[CACHE_TAG_FILES, CACHE_TAG_SUBJECTS],
                )
                .await;
        }
        Ok(counts)
    }

    pub async fn names(&self) -> Result<Vec<String>, ListSubjectsError> {
        if let Some(cached) = self.cache.get(CACHE_KEY_SUBJECT_LIST).await {
            if let Ok(names) = serde_json::from_value::<Vec<String>>(cached) {
                debug!("Subject names served from cache");
                return Ok(names);
            }
        }

        let names = self.file_repository.subject_names().await?;
        if let Ok(value) = serde_json::to_value(&names) {
            self.cache
                .put(
                    CACHE_KEY_SUBJECT_LIST,
                    value,
                    &[CACHE_TAG_FILES, CACHE_TAG_SUBJECTS],
                )
                .await;
        }
        Ok(names)
    }
}
