use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::search_indexer::SearchHit;

#[derive(Debug, Deserialize)]
pub struct SearchQueryDto {
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchHitDto {
    pub id: Uuid,
    pub original_name: String,
    pub subject: String,
    pub category: String,
    pub snippet: Option<String>,
}

impl From<SearchHit> for SearchHitDto {
    fn from(hit: SearchHit) -> Self {
        Self {
            id: hit.id,
            original_name: hit.original_name,
            subject: hit.subject,
            category: hit.category,
            snippet: hit.snippet,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponseDto {
    pub query: String,
    pub hits: Vec<SearchHitDto>,
    pub count: usize,
}
