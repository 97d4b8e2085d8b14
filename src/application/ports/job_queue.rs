use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug)]
pub enum JobQueueError {
    QueueClosed(String),
}

impl std::fmt::Display for JobQueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobQueueError::QueueClosed(msg) => write!(f, "Job queue closed: {}", msg),
        }
    }
}

impl std::error::Error for JobQueueError {}

/// Fire-and-forget handoff of a file record to the background workers. The
/// caller learns nothing about the outcome; it observes progress through the
/// record's `processing_status`.
#[async_trait]
pub trait JobQueue: Send + Sync {
    async fn enqueue(&self, file_id: Uuid) -> Result<(), JobQueueError>;

    /// Jobs handed over but not yet picked up by a worker.
    fn depth(&self) -> usize;
}
