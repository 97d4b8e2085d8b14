pub mod postgres_file_repository;

pub use postgres_file_repository::PostgresFileRepository;
