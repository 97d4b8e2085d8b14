pub mod file_dto;
pub mod response_dto;
pub mod search_dto;
pub mod subject_dto;

pub use file_dto::*;
pub use response_dto::*;
pub use search_dto::*;
pub use subject_dto::*;
