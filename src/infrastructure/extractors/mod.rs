pub mod html_extractor;
pub mod pdf_extractor;
pub mod plain_text_extractor;

pub use html_extractor::HtmlExtractor;
pub use pdf_extractor::PdfExtractor;
pub use plain_text_extractor::PlainTextExtractor;

use std::sync::Arc;

use crate::application::services::ExtractorRegistry;

/// Registry with every built-in strategy installed.
pub fn default_registry() -> ExtractorRegistry {
    let mut registry = ExtractorRegistry::new();
    registry.register(Arc::new(PdfExtractor::new()));
    registry.register(Arc::new(HtmlExtractor::new()));
    registry.register(Arc::new(PlainTextExtractor::new()));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FileExtension;

    #[test]
    fn test_default_strategies_cover_expected_extensions() {
        let registry = default_registry();
        for ext in ["pdf", "html", "htm", "txt", "md", "csv", "log"] {
            assert!(registry.supports(&FileExtension::new(ext)), "missing {}", ext);
        }
        assert!(!registry.supports(&FileExtension::new("zip")));
    }

    #[tokio::test]
    async fn test_dispatch_uses_normalized_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("NOTES.TXT");
        tokio::fs::write(&path, "hello").await.unwrap();

        let registry = default_registry();
        // Extension value objects normalize case on construction.
        let text = registry
            .extract(&path, &FileExtension::new(".TXT"))
            .await
            .unwrap();
        assert_eq!(text, "hello");
    }
}
