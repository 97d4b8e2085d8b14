pub mod delete_file;
pub mod get_file;
pub mod list_files;
pub mod list_subjects;
pub mod queue_processing;
pub mod search_documents;
pub mod system_stats;
pub mod upload_file;

pub use delete_file::DeleteFileUseCase;
pub use get_file::GetFileUseCase;
pub use list_files::ListFilesUseCase;
pub use list_subjects::ListSubjectsUseCase;
pub use queue_processing::QueueProcessingUseCase;
pub use search_documents::SearchDocumentsUseCase;
pub use system_stats::SystemStatsUseCase;
pub use upload_file::UploadFileUseCase;
