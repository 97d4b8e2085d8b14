use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug)]
pub enum FileStorageError {
    FileNotFound(String),
    PermissionDenied(String),
    IoError(String),
    InvalidPath(String),
}

impl std::fmt::Display for FileStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileStorageError::FileNotFound(path) => write!(f, "File not found: {}", path),
            FileStorageError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            FileStorageError::IoError(msg) => write!(f, "IO error: {}", msg),
            FileStorageError::InvalidPath(path) => write!(f, "Invalid path: {}", path),
        }
    }
}

impl std::error::Error for FileStorageError {}

/// Raw-bytes persistence. `storage_path` is the opaque token recorded on the
/// file entity; only this adapter knows how to turn it back into something
/// readable.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Persist `data` under `stored_name` and return the storage path to
    /// record on the entity.
    async fn store(&self, data: &[u8], stored_name: &str) -> Result<String, FileStorageError>;

    /// Resolve a recorded storage path to an absolute local filesystem path
    /// the extractors can open.
    async fn resolve_local_path(&self, storage_path: &str)
    -> Result<PathBuf, FileStorageError>;

    async fn delete(&self, storage_path: &str) -> Result<bool, FileStorageError>;
}
