pub mod cache_invalidator;
pub mod file_storage;
pub mod job_queue;
pub mod search_indexer;
pub mod text_extractor;

pub use cache_invalidator::{CACHE_TAG_FILES, CACHE_TAG_SUBJECTS, CacheInvalidator, CacheStore};
pub use file_storage::FileStorage;
pub use job_queue::JobQueue;
pub use search_indexer::SearchIndexer;
pub use text_extractor::TextExtractor;
