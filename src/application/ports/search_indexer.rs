use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::IndexedDocument;

#[derive(Debug)]
pub enum SearchIndexError {
    RequestError(String),
    ServiceError { status: u16, message: String },
    ParseError(String),
}

impl std::fmt::Display for SearchIndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchIndexError::RequestError(msg) => write!(f, "Request error: {}", msg),
            SearchIndexError::ServiceError { status, message } => {
                write!(f, "Search service error ({}): {}", status, message)
            }
            SearchIndexError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for SearchIndexError {}

/// One full-text search match, as returned to API consumers.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub id: Uuid,
    pub original_name: String,
    pub subject: String,
    pub category: String,
    pub snippet: Option<String>,
}

#[async_trait]
pub trait SearchIndexer: Send + Sync {
    /// Make the document queryable. Submitting a document with an id that is
    /// already indexed replaces the prior version.
    async fn index_document(&self, document: &IndexedDocument) -> Result<(), SearchIndexError>;

    async fn remove_document(&self, file_id: Uuid) -> Result<(), SearchIndexError>;

    async fn search(&self, query: &str, limit: usize)
    -> Result<Vec<SearchHit>, SearchIndexError>;
}
