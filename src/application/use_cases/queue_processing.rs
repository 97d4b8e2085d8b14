use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::application::ports::job_queue::{JobQueue, JobQueueError};
use crate::domain::repositories::file_repository::{FileRepository, FileRepositoryError};

#[derive(Debug)]
pub enum QueueProcessingError {
    NotFound(Uuid),
    RepositoryError(String),
    QueueError(String),
}

impl std::fmt::Display for QueueProcessingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueProcessingError::NotFound(id) => write!(f, "File not found: {}", id),
            QueueProcessingError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            QueueProcessingError::QueueError(msg) => write!(f, "Queue error: {}", msg),
        }
    }
}

impl std::error::Error for QueueProcessingError {}

impl From<FileRepositoryError> for QueueProcessingError {
    fn from(error: FileRepositoryError) -> Self {
        QueueProcessingError::RepositoryError(error.to_string())
    }
}

impl From<JobQueueError> for QueueProcessingError {
    fn from(error: JobQueueError) -> Self {
        QueueProcessingError::QueueError(error.to_string())
    }
}

/// Enqueue processing for an existing record. This is also the manual retry
/// path: records in any state may be re-enqueued, and the job handles
/// re-entry from terminal states.
pub struct QueueProcessingUseCase {
    file_repository: Arc<dyn FileRepository>,
    job_queue: Arc<dyn JobQueue>,
}

impl QueueProcessingUseCase {
    pub fn new(file_repository: Arc<dyn FileRepository>, job_queue: Arc<dyn JobQueue>) -> Self {
        Self {
            file_repository,
            job_queue,
        }
    }

    pub async fn execute(&self, file_id: Uuid) -> Result<(), QueueProcessingError> {
        let file = self
            .file_repository
            .find_by_id(file_id)
            .await?
            .ok_or(QueueProcessingError::NotFound(file_id))?;

        self.job_queue.enqueue(file_id).await?;
        info!(
            file_id = %file_id,
            status = %file.processing_status(),
            "Processing job enqueued"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{InMemoryFileRepository, RecordingQueue};
    use crate::domain::entities::UploadedFile;
    use crate::domain::value_objects::FileCategory;

    fn failed_file() -> UploadedFile {
        let mut file = UploadedFile::new(
            Uuid::new_v4(),
            "stored.pdf".to_string(),
            "paper.pdf".to_string(),
            "uploads/stored.pdf".to_string(),
            "Physics".to_string(),
            FileCategory::Materials,
            100,
        );
        file.begin_processing();
        file.fail_processing("search service unreachable".to_string())
            .unwrap();
        file
    }

    #[tokio::test]
    async fn test_failed_record_can_be_re_enqueued() {
        let repository = Arc::new(InMemoryFileRepository::new());
        let queue = Arc::new(RecordingQueue::new());
        let file = failed_file();
        let file_id = file.id();
        repository.insert(file);

        let use_case = QueueProcessingUseCase::new(repository, queue.clone());
        use_case.execute(file_id).await.unwrap();

        assert_eq!(queue.enqueued.lock().unwrap().as_slice(), &[file_id]);
    }

    #[tokio::test]
    async fn test_unknown_record_is_rejected() {
        let use_case = QueueProcessingUseCase::new(
            Arc::new(InMemoryFileRepository::new()),
            Arc::new(RecordingQueue::new()),
        );
        assert!(matches!(
            use_case.execute(Uuid::new_v4()).await,
            Err(QueueProcessingError::NotFound(_))
        ));
    }
}
