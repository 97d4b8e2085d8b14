use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::application::ports::text_extractor::{TextExtractionError, TextExtractor};
use crate::domain::value_objects::FileExtension;

/// Dispatch table from normalized extension to extraction strategy.
///
/// Unknown extensions are not an error: they resolve to empty content so the
/// processing pipeline can index the file by metadata alone. Concrete
/// strategies live in the infrastructure layer; the registry only knows the
/// [`TextExtractor`] port.
pub struct ExtractorRegistry {
    strategies: HashMap<String, Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Install a strategy for every extension it declares. A later
    /// registration for the same extension wins.
    pub fn register(&mut self, strategy: Arc<dyn TextExtractor>) {
        for extension in strategy.supported_extensions() {
            self.strategies
                .insert((*extension).to_string(), strategy.clone());
        }
    }

    pub fn supports(&self, extension: &FileExtension) -> bool {
        self.strategies.contains_key(extension.as_str())
    }

    pub async fn extract(
        &self,
        path: &Path,
        extension: &FileExtension,
    ) -> Result<String, TextExtractionError> {
        match self.strategies.get(extension.as_str()) {
            Some(strategy) => strategy.extract(path).await,
            None => {
                debug!(extension = %extension, "No extractor registered, returning empty content");
                Ok(String::new())
            }
        }
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct CannedExtractor {
        extensions: &'static [&'static str],
        text: &'static str,
    }

    #[async_trait]
    impl TextExtractor for CannedExtractor {
        fn supported_extensions(&self) -> &[&'static str] {
            self.extensions
        }

        async fn extract(&self, _path: &Path) -> Result<String, TextExtractionError> {
            Ok(self.text.to_string())
        }
    }

    #[tokio::test]
    async fn test_unknown_extension_yields_empty_content() {
        let registry = ExtractorRegistry::new();
        let text = registry
            .extract(Path::new("/tmp/archive.zip"), &FileExtension::new("zip"))
            .await
            .unwrap();
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_strategy_registered_for_every_declared_extension() {
        let mut registry = ExtractorRegistry::new();
        registry.register(Arc::new(CannedExtractor {
            extensions: &["txt", "md"],
            text: "body",
        }));

        assert!(registry.supports(&FileExtension::new("txt")));
        assert!(registry.supports(&FileExtension::new("md")));
        assert!(!registry.supports(&FileExtension::new("pdf")));

        let text = registry
            .extract(Path::new("/tmp/notes.md"), &FileExtension::new("md"))
            .await
            .unwrap();
        assert_eq!(text, "body");
    }

    #[tokio::test]
    async fn test_later_registration_overrides() {
        let mut registry = ExtractorRegistry::new();
        registry.register(Arc::new(CannedExtractor {
            extensions: &["txt"],
            text: "first",
        }));
        registry.register(Arc::new(CannedExtractor {
            extensions: &["txt"],
            text: "second",
        }));

        let text = registry
            .extract(Path::new("/tmp/whatever.txt"), &FileExtension::new("txt"))
            .await
            .unwrap();
        assert_eq!(text, "second");
    }
}
