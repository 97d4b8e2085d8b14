use async_trait::async_trait;
use std::path::Path;

use crate::application::ports::text_extractor::{TextExtractionError, TextExtractor};

/// Pass-through extraction for plain-text formats. Invalid UTF-8 is replaced
/// rather than rejected; a half-readable file beats no content at all.
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    fn supported_extensions(&self) -> &[&'static str] {
        &["txt", "md", "csv", "log"]
    }

    async fn extract(&self, path: &Path) -> Result<String, TextExtractionError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| TextExtractionError::FileUnreadable(e.to_string()))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
