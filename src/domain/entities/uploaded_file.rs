use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{FileCategory, FileExtension, ProcessingStatus};

/// One uploaded document and its background-processing state.
///
/// The processing fields (`processing_status`, `processing_error`,
/// `processed_at`) are written exclusively through the transition methods
/// below, which maintain two invariants:
/// - `Completed` implies no error and a `processed_at` timestamp;
/// - `Failed` implies a non-empty error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    id: Uuid,
    user_id: Uuid,
    stored_name: String,
    original_name: String,
    storage_path: String,
    subject: String,
    category: FileCategory,
    file_size: i64,
    extension: FileExtension,
    processing_status: ProcessingStatus,
    processing_error: Option<String>,
    processed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UploadedFile {
    pub fn new(
        user_id: Uuid,
        stored_name: String,
        original_name: String,
        storage_path: String,
        subject: String,
        category: FileCategory,
        file_size: i64,
    ) -> Self {
        let now = Utc::now();
        let extension = FileExtension::from_file_name(&original_name);
        Self {
            id: Uuid::new_v4(),
            user_id,
            stored_name,
            original_name,
            storage_path,
            subject,
            category,
            file_size,
            extension,
            processing_status: ProcessingStatus::Pending,
            processing_error: None,
            processed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstruct an entity from persisted values (repository use only).
    #[allow(clippy::too_many_arguments)]
    pub fn from_database(
        id: Uuid,
        user_id: Uuid,
        stored_name: String,
        original_name: String,
        storage_path: String,
        subject: String,
        category: FileCategory,
        file_size: i64,
        extension: FileExtension,
        processing_status: ProcessingStatus,
        processing_error: Option<String>,
        processed_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            stored_name,
            original_name,
            storage_path,
            subject,
            category,
            file_size,
            extension,
            processing_status,
            processing_error,
            processed_at,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn stored_name(&self) -> &str {
        &self.stored_name
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn storage_path(&self) -> &str {
        &self.storage_path
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn category(&self) -> FileCategory {
        self.category
    }

    pub fn file_size(&self) -> i64 {
        self.file_size
    }

    pub fn extension(&self) -> &FileExtension {
        &self.extension
    }

    pub fn processing_status(&self) -> ProcessingStatus {
        self.processing_status
    }

    pub fn processing_error(&self) -> Option<&str> {
        self.processing_error.as_deref()
    }

    pub fn processed_at(&self) -> Option<DateTime<Utc>> {
        self.processed_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Enter `Processing`. Permitted from any state: terminal records may be
    /// legitimately re-enqueued (re-index of a completed file, manual retry
    /// of a failed one).
    pub fn begin_processing(&mut self) {
        self.processing_status = ProcessingStatus::Processing;
        self.updated_at = Utc::now();
    }

    /// Enter `Completed`: clears the error and stamps `processed_at`.
    pub fn complete_processing(&mut self) -> Result<(), String> {
        if !self.processing_status.is_processing() {
            return Err(format!(
                "Cannot complete file in {} state",
                self.processing_status
            ));
        }

        self.processing_status = ProcessingStatus::Completed;
        self.processing_error = None;
        self.processed_at = Some(Utc::now());
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Enter `Failed` with a human-readable message.
    pub fn fail_processing(&mut self, error: String) -> Result<(), String> {
        if error.trim().is_empty() {
            return Err("Failure reason must not be empty".to_string());
        }

        self.processing_status = ProcessingStatus::Failed;
        self.processing_error = Some(error);
        self.processed_at = None;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn is_processed(&self) -> bool {
        self.processing_status.is_completed()
    }
}
