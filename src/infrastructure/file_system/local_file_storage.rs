use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::application::ports::file_storage::{FileStorage, FileStorageError};

/// Stores raw bytes under a base directory. The storage path recorded on the
/// entity is relative to the base, so the upload directory can move between
/// environments without rewriting records.
pub struct LocalFileStorage {
    base_path: PathBuf,
}

impl LocalFileStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub async fn ensure_directory_exists(&self) -> Result<(), FileStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| FileStorageError::IoError(e.to_string()))
    }

    fn absolute_path(&self, storage_path: &str) -> Result<PathBuf, FileStorageError> {
        let relative = Path::new(storage_path);
        // Reject anything that could escape the base directory.
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(FileStorageError::InvalidPath(storage_path.to_string()));
        }
        Ok(self.base_path.join(relative))
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn store(&self, data: &[u8], stored_name: &str) -> Result<String, FileStorageError> {
        self.ensure_directory_exists().await?;

        let storage_path = stored_name.to_string();
        let absolute = self.absolute_path(&storage_path)?;

        fs::write(&absolute, data)
            .await
            .map_err(|e| FileStorageError::IoError(e.to_string()))?;

        Ok(storage_path)
    }

    async fn resolve_local_path(
        &self,
        storage_path: &str,
    ) -> Result<PathBuf, FileStorageError> {
        let absolute = self.absolute_path(storage_path)?;

        if !absolute.exists() {
            return Err(FileStorageError::FileNotFound(storage_path.to_string()));
        }

        Ok(absolute)
    }

    async fn delete(&self, storage_path: &str) -> Result<bool, FileStorageError> {
        let absolute = self.absolute_path(storage_path)?;

        if !absolute.exists() {
            return Ok(false);
        }

        fs::remove_file(&absolute)
            .await
            .map_err(|e| FileStorageError::IoError(e.to_string()))?;

        Ok(true)
    }
}
