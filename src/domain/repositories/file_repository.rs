use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::UploadedFile;

#[derive(Debug)]
pub enum FileRepositoryError {
    NotFound(Uuid),
    DatabaseError(String),
    ValidationError(String),
}

impl std::fmt::Display for FileRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileRepositoryError::NotFound(id) => write!(f, "File not found: {}", id),
            FileRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            FileRepositoryError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for FileRepositoryError {}

/// Per-subject file count, as served by the subject listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectCount {
    pub subject: String,
    pub file_count: i64,
}

/// Aggregate counters backing the system statistics view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileStats {
    pub total_files: i64,
    pub total_bytes: i64,
    pub completed: i64,
    pub failed: i64,
    pub pending: i64,
}

#[async_trait]
pub trait FileRepository: Send + Sync {
    async fn save(&self, file: &UploadedFile) -> Result<Uuid, FileRepositoryError>;

    async fn find_by_id(&self, file_id: Uuid) -> Result<Option<UploadedFile>, FileRepositoryError>;

    async fn find_all(&self, skip: i64, limit: i64)
    -> Result<Vec<UploadedFile>, FileRepositoryError>;

    async fn find_by_subject(
        &self,
        subject: &str,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<UploadedFile>, FileRepositoryError>;

    /// Persist the current state of the entity. Writes are immediately
    /// visible to concurrent readers; the processing job relies on this when
    /// it flips a record to `Processing` before doing any work.
    async fn update(&self, file: &UploadedFile) -> Result<(), FileRepositoryError>;

    async fn delete(&self, file_id: Uuid) -> Result<bool, FileRepositoryError>;

    async fn count(&self) -> Result<i64, FileRepositoryError>;

    async fn subjects_with_counts(&self) -> Result<Vec<SubjectCount>, FileRepositoryError>;

    async fn subject_names(&self) -> Result<Vec<String>, FileRepositoryError>;

    async fn stats(&self) -> Result<FileStats, FileRepositoryError>;
}
