use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::use_cases::upload_file::UploadFileResponse;
use crate::domain::entities::UploadedFile;

#[derive(Debug, Serialize)]
pub struct FileResponseDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub original_name: String,
    pub subject: String,
    pub category: String,
    pub file_size: i64,
    pub extension: String,
    pub processing_status: String,
    pub processing_error: Option<String>,
    pub processed_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UploadedFile> for FileResponseDto {
    fn from(file: UploadedFile) -> Self {
        Self {
            id: file.id(),
            user_id: file.user_id(),
            original_name: file.original_name().to_string(),
            subject: file.subject().to_string(),
            category: file.category().to_string(),
            file_size: file.file_size(),
            extension: file.extension().to_string(),
            processing_status: file.processing_status().to_string(),
            processing_error: file.processing_error().map(|e| e.to_string()),
            processed_at: file.processed_at().map(|t| t.to_rfc3339()),
            created_at: file.created_at().to_rfc3339(),
            updated_at: file.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FileListQueryDto {
    pub subject: Option<String>,
    #[serde(default = "default_skip")]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_skip() -> i64 {
    0
}

fn default_limit() -> i64 {
    50
}

#[derive(Debug, Serialize)]
pub struct FileListResponseDto {
    pub files: Vec<FileResponseDto>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct UploadResponseDto {
    pub file_id: Uuid,
    pub file_name: String,
    pub subject: String,
    pub file_size: i64,
    pub processing_queued: bool,
    pub message: String,
}

impl From<UploadFileResponse> for UploadResponseDto {
    fn from(response: UploadFileResponse) -> Self {
        let message = if response.processing_queued {
            "File uploaded, processing queued".to_string()
        } else {
            "File uploaded, processing deferred".to_string()
        };
        Self {
            file_id: response.file_id,
            file_name: response.file_name,
            subject: response.subject,
            file_size: response.file_size,
            processing_queued: response.processing_queued,
            message,
        }
    }
}
