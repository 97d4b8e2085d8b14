pub mod file_category;
pub mod file_extension;
pub mod processing_status;

pub use file_category::FileCategory;
pub use file_extension::FileExtension;
pub use processing_status::ProcessingStatus;
