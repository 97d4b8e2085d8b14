use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use uuid::Uuid;

use crate::application::ports::search_indexer::{SearchHit, SearchIndexError, SearchIndexer};
use crate::domain::entities::IndexedDocument;

const SNIPPET_LENGTH: usize = 160;

#[derive(Debug, Clone)]
pub struct SearchClientConfig {
    pub service_url: String,
    pub index_name: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for SearchClientConfig {
    fn default() -> Self {
        let service_url = env::var("SEARCH_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:7700".to_string());
        let index_name = env::var("SEARCH_INDEX").unwrap_or_else(|_| "documents".to_string());
        let api_key = env::var("SEARCH_API_KEY").ok();

        Self {
            service_url,
            index_name,
            api_key,
            timeout_secs: 30,
        }
    }
}

#[derive(Serialize)]
struct SearchRequestBody {
    q: String,
    limit: usize,
}

#[derive(Deserialize)]
struct SearchResponseBody {
    hits: Vec<HitDocument>,
}

/// The indexed-document fields the search endpoint reads back. Unknown
/// fields in the service response are ignored.
#[derive(Deserialize)]
struct HitDocument {
    id: Uuid,
    original_name: String,
    subject: String,
    category: String,
    #[serde(default)]
    content: String,
}

/// Search indexer backed by a Meilisearch-compatible HTTP service. Documents
/// are keyed by file id, so re-submitting after re-processing replaces the
/// prior version.
pub struct HttpSearchIndexer {
    client: Client,
    config: SearchClientConfig,
}

impl HttpSearchIndexer {
    pub fn new(config: SearchClientConfig) -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, ReqwestError> {
        Self::new(SearchClientConfig::default())
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/indexes/{}/documents",
            self.config.service_url, self.config.index_name
        )
    }

    fn search_url(&self) -> String {
        format!(
            "{}/indexes/{}/search",
            self.config.service_url, self.config.index_name
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SearchIndexError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(SearchIndexError::ServiceError {
            status: status.as_u16(),
            message,
        })
    }

    fn snippet(content: &str) -> Option<String> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.chars().take(SNIPPET_LENGTH).collect())
    }
}

#[async_trait]
impl SearchIndexer for HttpSearchIndexer {
    async fn index_document(&self, document: &IndexedDocument) -> Result<(), SearchIndexError> {
        let request = self
            .authorize(self.client.post(self.documents_url()))
            .json(&[document]);

        let response = request
            .send()
            .await
            .map_err(|e| SearchIndexError::RequestError(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn remove_document(&self, file_id: Uuid) -> Result<(), SearchIndexError> {
        let url = format!("{}/{}", self.documents_url(), file_id);
        let response = self
            .authorize(self.client.delete(url))
            .send()
            .await
            .map_err(|e| SearchIndexError::RequestError(e.to_string()))?;

        // Deleting an unindexed document is not an error; removal is
        // best-effort cleanup after a record delete.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(());
        }

        Self::check_status(response).await?;
        Ok(())
    }

    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, SearchIndexError> {
        let body = SearchRequestBody {
            q: query.to_string(),
            limit,
        };

        let response = self
            .authorize(self.client.post(self.search_url()))
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchIndexError::RequestError(e.to_string()))?;

        let response = Self::check_status(response).await?;
        let parsed: SearchResponseBody = response
            .json()
            .await
            .map_err(|e| SearchIndexError::ParseError(e.to_string()))?;

        Ok(parsed
            .hits
            .into_iter()
            .map(|hit| SearchHit {
                id: hit.id,
                original_name: hit.original_name,
                subject: hit.subject,
                category: hit.category,
                snippet: Self::snippet(&hit.content),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_include_index_name() {
        let indexer = HttpSearchIndexer::new(SearchClientConfig {
            service_url: "http://search:7700".to_string(),
            index_name: "documents".to_string(),
            api_key: None,
            timeout_secs: 5,
        })
        .unwrap();

        assert_eq!(
            indexer.documents_url(),
            "http://search:7700/indexes/documents/documents"
        );
        assert_eq!(
            indexer.search_url(),
            "http://search:7700/indexes/documents/search"
        );
    }

    #[test]
    fn test_snippet_trims_and_bounds() {
        assert_eq!(HttpSearchIndexer::snippet("   "), None);
        assert_eq!(
            HttpSearchIndexer::snippet("  hello  "),
            Some("hello".to_string())
        );

        let long = "x".repeat(500);
        assert_eq!(HttpSearchIndexer::snippet(&long).unwrap().len(), SNIPPET_LENGTH);
    }

    #[test]
    fn test_hit_document_tolerates_missing_content() {
        let raw = serde_json::json!({
            "id": "8c4a39a2-8a26-4c03-8a10-4f5bd5f4a6a1",
            "original_name": "notes.pdf",
            "subject": "Physics",
            "category": "lectures"
        });
        let hit: HitDocument = serde_json::from_value(raw).unwrap();
        assert!(hit.content.is_empty());
    }
}
