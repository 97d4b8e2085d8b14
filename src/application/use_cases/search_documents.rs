use std::sync::Arc;

use crate::application::ports::search_indexer::{SearchHit, SearchIndexError, SearchIndexer};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 50;

#[derive(Debug)]
pub enum SearchDocumentsError {
    ValidationError(String),
    SearchError(String),
}

impl std::fmt::Display for SearchDocumentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchDocumentsError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            SearchDocumentsError::SearchError(msg) => write!(f, "Search error: {}", msg),
        }
    }
}

impl std::error::Error for SearchDocumentsError {}

impl From<SearchIndexError> for SearchDocumentsError {
    fn from(error: SearchIndexError) -> Self {
        SearchDocumentsError::SearchError(error.to_string())
    }
}

pub struct SearchDocumentsUseCase {
    search_indexer: Arc<dyn SearchIndexer>,
}

impl SearchDocumentsUseCase {
    pub fn new(search_indexer: Arc<dyn SearchIndexer>) -> Self {
        Self { search_indexer }
    }

    pub async fn execute(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<SearchHit>, SearchDocumentsError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchDocumentsError::ValidationError(
                "Search query cannot be empty".to_string(),
            ));
        }

        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        Ok(self.search_indexer.search(query, limit).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::RecordingIndexer;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_rejects_blank_query() {
        let use_case = SearchDocumentsUseCase::new(Arc::new(RecordingIndexer::new(false)));
        assert!(matches!(
            use_case.execute("   ", None).await,
            Err(SearchDocumentsError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_returns_indexer_hits() {
        let hit = SearchHit {
            id: Uuid::new_v4(),
            original_name: "notes.pdf".to_string(),
            subject: "Chemistry".to_string(),
            category: "materials".to_string(),
            snippet: Some("benzene ring".to_string()),
        };
        let use_case =
            SearchDocumentsUseCase::new(Arc::new(RecordingIndexer::with_hits(vec![hit])));

        let hits = use_case.execute("benzene", Some(10)).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].subject, "Chemistry");
    }

    #[tokio::test]
    async fn test_indexer_failure_surfaces_as_search_error() {
        let use_case = SearchDocumentsUseCase::new(Arc::new(RecordingIndexer::new(true)));
        assert!(matches!(
            use_case.execute("anything", None).await,
            Err(SearchDocumentsError::SearchError(_))
        ));
    }
}
