pub mod cache;
pub mod container;
pub mod database;
pub mod extractors;
pub mod file_system;
pub mod messaging;
pub mod search;

pub use container::AppContainer;
