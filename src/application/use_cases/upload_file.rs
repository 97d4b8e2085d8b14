use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::ports::{
    CACHE_TAG_FILES, CACHE_TAG_SUBJECTS, CacheInvalidator, FileStorage, JobQueue,
};
use crate::domain::entities::UploadedFile;
use crate::domain::repositories::file_repository::{FileRepository, FileRepositoryError};
use crate::domain::value_objects::{FileCategory, FileExtension};

#[derive(Debug)]
pub enum UploadFileError {
    ValidationError(String),
    StorageError(String),
    RepositoryError(String),
}

impl std::fmt::Display for UploadFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadFileError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            UploadFileError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            UploadFileError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UploadFileError {}

impl From<FileRepositoryError> for UploadFileError {
    fn from(error: FileRepositoryError) -> Self {
        UploadFileError::RepositoryError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct UploadFileRequest {
    pub user_id: Uuid,
    pub file_name: String,
    pub subject: String,
    pub category: String,
    pub file_data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct UploadFileResponse {
    pub file_id: Uuid,
    pub file_name: String,
    pub subject: String,
    pub file_size: i64,
    pub processing_queued: bool,
}

/// Record an upload and hand it to the background pipeline: store the bytes,
/// persist a `pending` record, enqueue the processing job, and drop the
/// derived read caches that now show stale listings.
pub struct UploadFileUseCase {
    file_repository: Arc<dyn FileRepository>,
    file_storage: Arc<dyn FileStorage>,
    job_queue: Arc<dyn JobQueue>,
    cache_invalidator: Arc<dyn CacheInvalidator>,
}

impl UploadFileUseCase {
    pub fn new(
        file_repository: Arc<dyn FileRepository>,
        file_storage: Arc<dyn FileStorage>,
        job_queue: Arc<dyn JobQueue>,
        cache_invalidator: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            file_repository,
            file_storage,
            job_queue,
            cache_invalidator,
        }
    }

    pub async fn execute(
        &self,
        request: UploadFileRequest,
    ) -> Result<UploadFileResponse, UploadFileError> {
        if request.file_name.trim().is_empty() {
            return Err(UploadFileError::ValidationError(
                "File name cannot be empty".to_string(),
            ));
        }
        if request.subject.trim().is_empty() {
            return Err(UploadFileError::ValidationError(
                "Subject cannot be empty".to_string(),
            ));
        }
        if request.file_data.is_empty() {
            return Err(UploadFileError::ValidationError(
                "File data cannot be empty".to_string(),
            ));
        }
        let category = FileCategory::parse(&request.category)
            .map_err(UploadFileError::ValidationError)?;

        let extension = FileExtension::from_file_name(&request.file_name);
        let stored_name = if extension.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            format!("{}.{}", Uuid::new_v4(), extension)
        };

        let storage_path = self
            .file_storage
            .store(&request.file_data, &stored_name)
            .await
            .map_err(|e| UploadFileError::StorageError(e.to_string()))?;

        let file = UploadedFile::new(
            request.user_id,
            stored_name,
            request.file_name.clone(),
            storage_path,
            request.subject.trim().to_string(),
            category,
            request.file_data.len() as i64,
        );

        let file_id = self.file_repository.save(&file).await?;

        // The record stays `pending` if the queue is gone; a later re-enqueue
        // picks it up. The upload itself has already succeeded.
        let processing_queued = match self.job_queue.enqueue(file_id).await {
            Ok(()) => true,
            Err(e) => {
                warn!(file_id = %file_id, error = %e, "Failed to enqueue processing job");
                false
            }
        };

        self.cache_invalidator.invalidate_tag(CACHE_TAG_FILES).await;
        self.cache_invalidator
            .invalidate_tag(CACHE_TAG_SUBJECTS)
            .await;

        info!(
            file_id = %file_id,
            subject = %file.subject(),
            size = file.file_size(),
            processing_queued,
            "File uploaded"
        );

        Ok(UploadFileResponse {
            file_id,
            file_name: request.file_name,
            subject: file.subject().to_string(),
            file_size: file.file_size(),
            processing_queued,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        FakeStorage, InMemoryFileRepository, RecordingCache, RecordingQueue,
    };
    use crate::domain::value_objects::ProcessingStatus;

    fn request() -> UploadFileRequest {
        UploadFileRequest {
            user_id: Uuid::new_v4(),
            file_name: "Graph Theory Notes.pdf".to_string(),
            subject: "Discrete Math".to_string(),
            category: "lectures".to_string(),
            file_data: b"%PDF-1.4 fake".to_vec(),
        }
    }

    #[tokio::test]
    async fn test_upload_persists_pending_record_and_enqueues() {
        let repository = Arc::new(InMemoryFileRepository::new());
        let queue = Arc::new(RecordingQueue::new());
        let cache = Arc::new(RecordingCache::new());
        let use_case = UploadFileUseCase::new(
            repository.clone(),
            Arc::new(FakeStorage::new()),
            queue.clone(),
            cache,
        );

        let response = use_case.execute(request()).await.unwrap();

        assert!(response.processing_queued);
        assert_eq!(queue.enqueued.lock().unwrap().as_slice(), &[response.file_id]);

        let stored = repository
            .find_by_id(response.file_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.processing_status(), ProcessingStatus::Pending);
        assert_eq!(stored.subject(), "Discrete Math");
        assert_eq!(stored.extension().as_str(), "pdf");
    }

    #[tokio::test]
    async fn test_upload_survives_closed_queue() {
        let repository = Arc::new(InMemoryFileRepository::new());
        let use_case = UploadFileUseCase::new(
            repository.clone(),
            Arc::new(FakeStorage::new()),
            Arc::new(RecordingQueue::closed()),
            Arc::new(RecordingCache::new()),
        );

        let response = use_case.execute(request()).await.unwrap();

        assert!(!response.processing_queued);
        let stored = repository
            .find_by_id(response.file_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.processing_status(), ProcessingStatus::Pending);
    }

    #[tokio::test]
    async fn test_rejects_unknown_category() {
        let use_case = UploadFileUseCase::new(
            Arc::new(InMemoryFileRepository::new()),
            Arc::new(FakeStorage::new()),
            Arc::new(RecordingQueue::new()),
            Arc::new(RecordingCache::new()),
        );

        let mut bad = request();
        bad.category = "homework".to_string();
        assert!(matches!(
            use_case.execute(bad).await,
            Err(UploadFileError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_rejects_empty_payload() {
        let use_case = UploadFileUseCase::new(
            Arc::new(InMemoryFileRepository::new()),
            Arc::new(FakeStorage::new()),
            Arc::new(RecordingQueue::new()),
            Arc::new(RecordingCache::new()),
        );

        let mut bad = request();
        bad.file_data.clear();
        assert!(matches!(
            use_case.execute(bad).await,
            Err(UploadFileError::ValidationError(_))
        ));
    }
}
