pub mod uploaded_file_model;

pub use uploaded_file_model::{NewUploadedFileModel, UploadedFileModel};
