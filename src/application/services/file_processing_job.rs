use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::application::ports::cache_invalidator::{
    CACHE_KEY_SUBJECT_LIST, CACHE_KEY_SUBJECTS_WITH_COUNTS, CACHE_KEY_SYSTEM_STATS,
    CACHE_TAG_FILES, CACHE_TAG_SUBJECTS,
};
use crate::application::ports::file_storage::FileStorageError;
use crate::application::ports::search_indexer::SearchIndexError;
use crate::application::ports::{CacheInvalidator, FileStorage, SearchIndexer};
use crate::application::services::extractor_registry::ExtractorRegistry;
use crate::domain::entities::{IndexedDocument, UploadedFile};
use crate::domain::repositories::{FileRepository, FileRepositoryError};

#[derive(Debug)]
pub enum FileProcessingError {
    RecordNotFound(Uuid),
    RepositoryError(String),
    StorageError(String),
    IndexingError(String),
    InvalidState(String),
}

impl std::fmt::Display for FileProcessingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileProcessingError::RecordNotFound(id) => write!(f, "File record not found: {}", id),
            FileProcessingError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            FileProcessingError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            FileProcessingError::IndexingError(msg) => write!(f, "Indexing error: {}", msg),
            FileProcessingError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for FileProcessingError {}

impl From<FileRepositoryError> for FileProcessingError {
    fn from(error: FileRepositoryError) -> Self {
        FileProcessingError::RepositoryError(error.to_string())
    }
}

impl From<FileStorageError> for FileProcessingError {
    fn from(error: FileStorageError) -> Self {
        FileProcessingError::StorageError(error.to_string())
    }
}

impl From<SearchIndexError> for FileProcessingError {
    fn from(error: SearchIndexError) -> Self {
        FileProcessingError::IndexingError(error.to_string())
    }
}

/// Drives one uploaded file through extraction, indexing, and status
/// finalization.
///
/// Failure semantics per step:
/// - storage path resolution: fatal, propagates so the retry layer re-runs;
/// - text extraction: tolerated, degrades to empty content (the document
///   must stay findable by name and metadata even without body text);
/// - search indexing: fatal, propagates;
/// - a fatal error is persisted on the record as `Failed` before it is
///   re-raised, never swallowed.
///
/// The job knows nothing about attempt counts. The queue infrastructure owns
/// the retry budget and calls [`mark_retries_exhausted`] once it gives up.
///
/// [`mark_retries_exhausted`]: FileProcessingJob::mark_retries_exhausted
pub struct FileProcessingJob {
    file_repository: Arc<dyn FileRepository>,
    file_storage: Arc<dyn FileStorage>,
    extractors: Arc<ExtractorRegistry>,
    search_indexer: Arc<dyn SearchIndexer>,
    cache_invalidator: Arc<dyn CacheInvalidator>,
}

impl FileProcessingJob {
    pub fn new(
        file_repository: Arc<dyn FileRepository>,
        file_storage: Arc<dyn FileStorage>,
        extractors: Arc<ExtractorRegistry>,
        search_indexer: Arc<dyn SearchIndexer>,
        cache_invalidator: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            file_repository,
            file_storage,
            extractors,
            search_indexer,
            cache_invalidator,
        }
    }

    /// Run one processing attempt for `file_id`, start to finish.
    pub async fn run(&self, file_id: Uuid) -> Result<(), FileProcessingError> {
        let mut file = self
            .file_repository
            .find_by_id(file_id)
            .await?
            .ok_or(FileProcessingError::RecordNotFound(file_id))?;

        // Persist the in-flight state immediately so concurrent readers see
        // the record as processing for the whole attempt.
        file.begin_processing();
        self.file_repository.update(&file).await?;

        match self.extract_and_index(&file).await {
            Ok(()) => {
                file.complete_processing()
                    .map_err(FileProcessingError::InvalidState)?;
                self.file_repository.update(&file).await?;

                self.invalidate_derived_caches().await;

                info!(file_id = %file_id, subject = %file.subject(), "File processed and indexed");
                Ok(())
            }
            Err(e) => {
                error!(file_id = %file_id, error = %e, "File processing attempt failed");
                self.persist_failure(&mut file, e.to_string()).await;
                Err(e)
            }
        }
    }

    /// Final-failure handler, invoked by the queue infrastructure after the
    /// last allowed attempt. Overwrites whatever transient error the failed
    /// attempts left behind and does not re-raise.
    pub async fn mark_retries_exhausted(&self, file_id: Uuid, attempts: u32, last_error: &str) {
        let message = format!(
            "Processing failed after {} attempts: {}",
            attempts, last_error
        );
        error!(file_id = %file_id, attempts, "{}", message);

        match self.file_repository.find_by_id(file_id).await {
            Ok(Some(mut file)) => {
                self.persist_failure(&mut file, message).await;
            }
            Ok(None) => {
                warn!(file_id = %file_id, "Record vanished before exhaustion could be recorded");
            }
            Err(e) => {
                error!(file_id = %file_id, error = %e, "Failed to load record for exhaustion handling");
            }
        }
    }

    async fn extract_and_index(&self, file: &UploadedFile) -> Result<(), FileProcessingError> {
        let local_path = self
            .file_storage
            .resolve_local_path(file.storage_path())
            .await?;

        let content = match self.extractors.extract(&local_path, file.extension()).await {
            Ok(text) => text,
            Err(e) => {
                // Non-fatal: continue with empty content.
                warn!(
                    file_id = %file.id(),
                    extension = %file.extension(),
                    error = %e,
                    "Text extraction failed, indexing with empty content"
                );
                String::new()
            }
        };

        let document = IndexedDocument::from_file(file, content);
        self.search_indexer.index_document(&document).await?;
        Ok(())
    }

    async fn persist_failure(&self, file: &mut UploadedFile, message: String) {
        if let Err(e) = file.fail_processing(message) {
            error!(file_id = %file.id(), error = %e, "Could not record failure on entity");
            return;
        }
        if let Err(e) = self.file_repository.update(file).await {
            error!(file_id = %file.id(), error = %e, "Could not persist failed status");
        }
    }

    /// The record's presence in counts and listings just changed, so every
    /// derived read keyed on files or subjects is stale. Redundant calls are
    /// harmless.
    async fn invalidate_derived_caches(&self) {
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
    }
}
