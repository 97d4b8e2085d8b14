pub mod extractor_registry;
pub mod file_processing_job;
pub mod retry_policy;

pub use extractor_registry::ExtractorRegistry;
pub use file_processing_job::{FileProcessingError, FileProcessingJob};
pub use retry_policy::{RetryError, RetryPolicy};
