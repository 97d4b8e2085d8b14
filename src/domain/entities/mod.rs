pub mod indexed_document;
pub mod uploaded_file;

pub use indexed_document::IndexedDocument;
pub use uploaded_file::UploadedFile;
