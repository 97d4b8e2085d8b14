pub mod http_search_indexer;

pub use http_search_indexer::{HttpSearchIndexer, SearchClientConfig};
