pub mod file_routes;
pub mod health_routes;
pub mod search_routes;
pub mod subject_routes;

pub use file_routes::*;
pub use health_routes::*;
pub use search_routes::*;
pub use subject_routes::*;
