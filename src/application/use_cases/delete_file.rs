use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::ports::cache_invalidator::{
    CACHE_KEY_SUBJECT_LIST, CACHE_KEY_SUBJECTS_WITH_COUNTS, CACHE_KEY_SYSTEM_STATS,
    CACHE_TAG_FILES, CACHE_TAG_SUBJECTS,
};
use crate::application::ports::{CacheInvalidator, FileStorage, SearchIndexer};
use crate::domain::repositories::file_repository::{FileRepository, FileRepositoryError};

#[derive(Debug)]
pub enum DeleteFileError {
    NotFound(Uuid),
    RepositoryError(String),
}

impl std::fmt::Display for DeleteFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteFileError::NotFound(id) => write!(f, "File not found: {}", id),
            DeleteFileError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteFileError {}

impl From<FileRepositoryError> for DeleteFileError {
    fn from(error: FileRepositoryError) -> Self {
        DeleteFileError::RepositoryError(error.to_string())
    }
}

/// Remove a file everywhere it lives. The database row is authoritative;
/// stored bytes and the search index entry are cleaned up best-effort, since
/// an orphaned blob or a stale index hit is recoverable while a dangling
/// database row is not.
pub struct DeleteFileUseCase {
    file_repository: Arc<dyn FileRepository>,
    file_storage: Arc<dyn FileStorage>,
    search_indexer: Arc<dyn SearchIndexer>,
    cache_invalidator: Arc<dyn CacheInvalidator>,
}

impl DeleteFileUseCase {
    pub fn new(
        file_repository: Arc<dyn FileRepository>,
        file_storage: Arc<dyn FileStorage>,
        search_indexer: Arc<dyn SearchIndexer>,
        cache_invalidator: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            file_repository,
            file_storage,
            search_indexer,
            cache_invalidator,
        }
    }

    pub async fn execute(&self, file_id: Uuid) -> Result<(), DeleteFileError> {
        let file = self
            .file_repository
            .find_by_id(file_id)
            .await?
            .ok_or(DeleteFileError::NotFound(file_id))?;

        let deleted = self.file_repository.delete(file_id).await?;
        if !deleted {
            return Err(DeleteFileError::NotFound(file_id));
        }

        if let Err(e) = self.file_storage.delete(file.storage_path()).await {
            warn!(file_id = %file_id, error = %e, "Could not delete stored bytes");
        }
        if let Err(e) = self.search_indexer.remove_document(file_id).await {
            warn!(file_id = %file_id, error = %e, "Could not remove document from search index");
        }

        self.cache_invalidator.invalidate_tag(CACHE_TAG_FILES).await;
        self.cache_invalidator
            .invalidate_tag(CACHE_TAG_SUBJECTS)
            .await;
        self.cache_invalidator
            .invalidate_key(CACHE_KEY_SYSTEM_STATS)
            .await;
        self.cache_invalidator
            .invalidate_key(CACHE_KEY_SUBJECTS_WITH_COUNTS)
            .await;
        self.cache_invalidator
            .invalidate_key(CACHE_KEY_SUBJECT_LIST)
            .await;

        info!(file_id = %file_id, subject = %file.subject(), "File deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        FakeStorage, InMemoryFileRepository, RecordingCache, RecordingIndexer,
    };
    use crate::domain::entities::UploadedFile;
    use crate::domain::value_objects::FileCategory;

    fn sample_file() -> UploadedFile {
        UploadedFile::new(
            Uuid::new_v4(),
            "stored.pdf".to_string(),
            "paper.pdf".to_string(),
            "uploads/stored.pdf".to_string(),
            "Physics".to_string(),
            FileCategory::Materials,
            100,
        )
    }

    #[tokio::test]
    async fn test_deletes_record_index_entry_and_caches() {
        let repository = Arc::new(InMemoryFileRepository::new());
        let indexer = Arc::new(RecordingIndexer::new(false));
        let cache = Arc::new(RecordingCache::new());
        let file = sample_file();
        let file_id = file.id();
        repository.insert(file);

        let use_case = DeleteFileUseCase::new(
            repository.clone(),
            Arc::new(FakeStorage::new()),
            indexer.clone(),
            cache.clone(),
        );
        use_case.execute(file_id).await.unwrap();

        assert!(repository.find_by_id(file_id).await.unwrap().is_none());
        assert_eq!(indexer.removed.lock().unwrap().as_slice(), &[file_id]);
        assert_eq!(cache.tags.lock().unwrap().len(), 2);
        assert_eq!(cache.keys.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_index_failure_does_not_fail_the_delete() {
        let repository = Arc::new(InMemoryFileRepository::new());
        let file = sample_file();
        let file_id = file.id();
        repository.insert(file);

        let use_case = DeleteFileUseCase::new(
            repository.clone(),
            Arc::new(FakeStorage::new()),
            Arc::new(RecordingIndexer::new(true)),
            Arc::new(RecordingCache::new()),
        );

        use_case.execute(file_id).await.unwrap();
        assert!(repository.find_by_id(file_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let use_case = DeleteFileUseCase::new(
            Arc::new(InMemoryFileRepository::new()),
            Arc::new(FakeStorage::new()),
            Arc::new(RecordingIndexer::new(false)),
            Arc::new(RecordingCache::new()),
        );

        assert!(matches!(
            use_case.execute(Uuid::new_v4()).await,
            Err(DeleteFileError::NotFound(_))
        ));
    }
}
