//! Hand-written port fakes shared by the application-layer test modules.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

use crate::application::ports::file_storage::{FileStorage, FileStorageError};
use crate::application::ports::job_queue::{JobQueue, JobQueueError};
use crate::application::ports::search_indexer::{SearchHit, SearchIndexError, SearchIndexer};
use crate::application::ports::text_extractor::{TextExtractionError, TextExtractor};
use crate::application::ports::CacheInvalidator;
use crate::domain::entities::{IndexedDocument, UploadedFile};
use crate::domain::repositories::file_repository::{
    FileRepository, FileRepositoryError, FileStats, SubjectCount,
};

pub struct InMemoryFileRepository {
    files: Mutex<HashMap<Uuid, UploadedFile>>,
}

impl InMemoryFileRepository {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert(&self, file: UploadedFile) {
        self.files.lock().unwrap().insert(file.id(), file);
    }

    pub fn get(&self, id: Uuid) -> UploadedFile {
        self.files.lock().unwrap().get(&id).unwrap().clone()
    }
}

#[async_trait]
impl FileRepository for InMemoryFileRepository {
    async fn save(&self, file: &UploadedFile) -> Result<Uuid, FileRepositoryError> {
        self.insert(file.clone());
        Ok(file.id())
    }

    async fn find_by_id(
        &self,
        file_id: Uuid,
    ) -> Result<Option<UploadedFile>, FileRepositoryError> {
        Ok(self.files.lock().unwrap().get(&file_id).cloned())
    }

    async fn find_all(
        &self,
        _skip: i64,
        _limit: i64,
    ) -> Result<Vec<UploadedFile>, FileRepositoryError> {
        Ok(self.files.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_subject(
        &self,
        subject: &str,
        _skip: i64,
        _limit: i64,
    ) -> Result<Vec<UploadedFile>, FileRepositoryError> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .values()
            .filter(|f| f.subject() == subject)
            .cloned()
            .collect())
    }

    async fn update(&self, file: &UploadedFile) -> Result<(), FileRepositoryError> {
        self.insert(file.clone());
        Ok(())
    }

    async fn delete(&self, file_id: Uuid) -> Result<bool, FileRepositoryError> {
        Ok(self.files.lock().unwrap().remove(&file_id).is_some())
    }

    async fn count(&self) -> Result<i64, FileRepositoryError> {
        Ok(self.files.lock().unwrap().len() as i64)
    }

    async fn subjects_with_counts(&self) -> Result<Vec<SubjectCount>, FileRepositoryError> {
        let files = self.files.lock().unwrap();
        let mut counts: HashMap<String, i64> = HashMap::new();
        for file in files.values() {
            *counts.entry(file.subject().to_string()).or_insert(0) += 1;
        }
        let mut rows: Vec<SubjectCount> = counts
            .into_iter()
            .map(|(subject, file_count)| SubjectCount {
                subject,
                file_count,
            })
            .collect();
        rows.sort_by(|a, b| a.subject.cmp(&b.subject));
        Ok(rows)
    }

    async fn subject_names(&self) -> Result<Vec<String>, FileRepositoryError> {
        let rows = self.subjects_with_counts().await?;
        Ok(rows.into_iter().map(|row| row.subject).collect())
    }

    async fn stats(&self) -> Result<FileStats, FileRepositoryError> {
        let files = self.files.lock().unwrap();
        let mut stats = FileStats {
            total_files: files.len() as i64,
            ..FileStats::default()
        };
        for file in files.values() {
            stats.total_bytes += file.file_size();
            let status = file.processing_status();
            if status.is_completed() {
                stats.completed += 1;
            } else if status.is_failed() {
                stats.failed += 1;
            } else {
                stats.pending += 1;
            }
        }
        Ok(stats)
    }
}

pub struct FakeStorage {
    pub fail: bool,
}

impl FakeStorage {
    pub fn new() -> Self {
        Self { fail: false }
    }
}

#[async_trait]
impl FileStorage for FakeStorage {
    async fn store(&self, _data: &[u8], stored_name: &str) -> Result<String, FileStorageError> {
        Ok(format!("uploads/{}", stored_name))
    }

    async fn resolve_local_path(&self, storage_path: &str) -> Result<PathBuf, FileStorageError> {
        if self.fail {
            return Err(FileStorageError::FileNotFound(storage_path.to_string()));
        }
        Ok(PathBuf::from(storage_path))
    }

    async fn delete(&self, _storage_path: &str) -> Result<bool, FileStorageError> {
        Ok(true)
    }
}

pub struct StaticExtractor {
    pub text: &'static str,
}

#[async_trait]
impl TextExtractor for StaticExtractor {
    fn supported_extensions(&self) -> &[&'static str] {
        &["pdf"]
    }

    async fn extract(&self, _path: &Path) -> Result<String, TextExtractionError> {
        Ok(self.text.to_string())
    }
}

pub struct FailingExtractor;

#[async_trait]
impl TextExtractor for FailingExtractor {
    fn supported_extensions(&self) -> &[&'static str] {
        &["pdf"]
    }

    async fn extract(&self, _path: &Path) -> Result<String, TextExtractionError> {
        Err(TextExtractionError::CorruptedFile(
            "corrupt file".to_string(),
        ))
    }
}

pub struct RecordingIndexer {
    pub fail: bool,
    pub indexed: Mutex<Vec<IndexedDocument>>,
    pub removed: Mutex<Vec<Uuid>>,
    pub hits: Vec<SearchHit>,
}

impl RecordingIndexer {
    pub fn new(fail: bool) -> Self {
        Self {
            fail,
            indexed: Mutex::new(Vec::new()),
            removed: Mutex::new(Vec::new()),
            hits: Vec::new(),
        }
    }

    pub fn with_hits(hits: Vec<SearchHit>) -> Self {
        Self {
            fail: false,
            indexed: Mutex::new(Vec::new()),
            removed: Mutex::new(Vec::new()),
            hits,
        }
    }
}

#[async_trait]
impl SearchIndexer for RecordingIndexer {
    async fn index_document(&self, document: &IndexedDocument) -> Result<(), SearchIndexError> {
        if self.fail {
            return Err(SearchIndexError::ServiceError {
                status: 503,
                message: "index unavailable".to_string(),
            });
        }
        self.indexed.lock().unwrap().push(document.clone());
        Ok(())
    }

    async fn remove_document(&self, file_id: Uuid) -> Result<(), SearchIndexError> {
        if self.fail {
            return Err(SearchIndexError::ServiceError {
                status: 503,
                message: "index unavailable".to_string(),
            });
        }
        self.removed.lock().unwrap().push(file_id);
        Ok(())
    }

    async fn search(
        &self,
        _query: &str,
        _limit: usize,
    ) -> Result<Vec<SearchHit>, SearchIndexError> {
        if self.fail {
            return Err(SearchIndexError::ServiceError {
                status: 503,
                message: "index unavailable".to_string(),
            });
        }
        Ok(self.hits.clone())
    }
}

#[derive(Default)]
pub struct RecordingCache {
    pub tags: Mutex<Vec<String>>,
    pub keys: Mutex<Vec<String>>,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheInvalidator for RecordingCache {
    async fn invalidate_tag(&self, tag: &str) {
        self.tags.lock().unwrap().push(tag.to_string());
    }

    async fn invalidate_key(&self, key: &str) {
        self.keys.lock().unwrap().push(key.to_string());
    }
}

pub struct RecordingQueue {
    pub enqueued: Mutex<Vec<Uuid>>,
    pub fail: bool,
}

impl RecordingQueue {
    pub fn new() -> Self {
        Self {
            enqueued: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn closed() -> Self {
        Self {
            enqueued: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

#[async_trait]
impl JobQueue for RecordingQueue {
    async fn enqueue(&self, file_id: Uuid) -> Result<(), JobQueueError> {
        if self.fail {
            return Err(JobQueueError::QueueClosed("closed".to_string()));
        }
        self.enqueued.lock().unwrap().push(file_id);
        Ok(())
    }

    fn depth(&self) -> usize {
        self.enqueued.lock().unwrap().len()
    }
}
