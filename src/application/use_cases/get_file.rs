use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::UploadedFile;
use crate::domain::repositories::file_repository::{FileRepository, FileRepositoryError};

#[derive(Debug)]
pub enum GetFileError {
    NotFound(Uuid),
    RepositoryError(String),
}

impl std::fmt::Display for GetFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetFileError::NotFound(id) => write!(f, "File not found: {}", id),
            GetFileError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GetFileError {}

impl From<FileRepositoryError> for GetFileError {
    fn from(error: FileRepositoryError) -> Self {
        GetFileError::RepositoryError(error.to_string())
    }
}

pub struct GetFileUseCase {
    file_repository: Arc<dyn FileRepository>,
}

impl GetFileUseCase {
    pub fn new(file_repository: Arc<dyn FileRepository>) -> Self {
        Self { file_repository }
    }

    pub async fn execute(&self, file_id: Uuid) -> Result<UploadedFile, GetFileError> {
        self.file_repository
            .find_by_id(file_id)
            .await?
            .ok_or(GetFileError::NotFound(file_id))
    }
}
