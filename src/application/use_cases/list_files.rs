use std::sync::Arc;

use crate::domain::entities::UploadedFile;
use crate::domain::repositories::file_repository::{FileRepository, FileRepositoryError};

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 100;

#[derive(Debug)]
pub enum ListFilesError {
    RepositoryError(String),
}

impl std::fmt::Display for ListFilesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListFilesError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ListFilesError {}

impl From<FileRepositoryError> for ListFilesError {
    fn from(error: FileRepositoryError) -> Self {
        ListFilesError::RepositoryError(error.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListFilesRequest {
    pub subject: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

pub struct ListFilesUseCase {
    file_repository: Arc<dyn FileRepository>,
}

impl ListFilesUseCase {
    pub fn new(file_repository: Arc<dyn FileRepository>) -> Self {
        Self { file_repository }
    }

    pub async fn execute(
        &self,
        request: ListFilesRequest,
    ) -> Result<Vec<UploadedFile>, ListFilesError> {
        let skip = request.skip.unwrap_or(0).max(0);
        let limit = request
            .limit
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(1, MAX_LIMIT);

        let files = match request.subject.as_deref() {
            Some(subject) if !subject.trim().is_empty() => {
                self.file_repository
                    .find_by_subject(subject.trim(), skip, limit)
                    .await?
            }
            _ => self.file_repository.find_all(skip, limit).await?,
        };

        Ok(files)
    }
}
