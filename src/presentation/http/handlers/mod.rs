pub mod file_handler;
pub mod health_handler;
pub mod search_handler;
pub mod subject_handler;

pub use file_handler::FileHandler;
pub use health_handler::HealthHandler;
pub use search_handler::SearchHandler;
pub use subject_handler::SubjectHandler;
