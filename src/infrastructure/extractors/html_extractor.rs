use async_trait::async_trait;
use html2text::from_read;
use std::path::Path;

use crate::application::ports::text_extractor::{TextExtractionError, TextExtractor};

const TEXT_WIDTH: usize = 80;

/// HTML to plain text via html2text.
pub struct HtmlExtractor;

impl HtmlExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for HtmlExtractor {
    fn supported_extensions(&self) -> &[&'static str] {
        &["html", "htm"]
    }

    async fn extract(&self, path: &Path) -> Result<String, TextExtractionError> {
        let html = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TextExtractionError::FileUnreadable(e.to_string()))?;

        let text = from_read(html.as_bytes(), TEXT_WIDTH).map_err(|e| {
            TextExtractionError::ExtractionFailed(format!(
                "Failed to convert HTML to text: {}",
                e
            ))
        })?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_extracts_body_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        tokio::fs::write(
            &path,
            "<html><body><h1>Calculus</h1><p>Limits and derivatives.</p></body></html>",
        )
        .await
        .unwrap();

        let text = HtmlExtractor::new().extract(&path).await.unwrap();
        assert!(text.contains("Calculus"));
        assert!(text.contains("Limits and derivatives."));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let result = HtmlExtractor::new()
            .extract(Path::new("/nonexistent/page.html"))
            .await;
        assert!(matches!(
            result,
            Err(TextExtractionError::FileUnreadable(_))
        ));
    }
}
