use async_trait::async_trait;
use std::path::Path;

#[derive(Debug)]
pub enum TextExtractionError {
    FileUnreadable(String),
    CorruptedFile(String),
    ExtractionFailed(String),
}

impl std::fmt::Display for TextExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextExtractionError::FileUnreadable(msg) => write!(f, "File unreadable: {}", msg),
            TextExtractionError::CorruptedFile(msg) => write!(f, "Corrupted file: {}", msg),
            TextExtractionError::ExtractionFailed(msg) => {
                write!(f, "Extraction failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for TextExtractionError {}

/// One extraction strategy for a fixed set of extensions.
///
/// Strategies are expected to degrade on their own where they can: an
/// encrypted or scanned document yields `Ok` with empty text rather than an
/// error. Errors are reserved for total failure (unreadable bytes, parser
/// crash); the processing job tolerates those too, as a second layer.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Normalized lowercase extensions this strategy handles.
    fn supported_extensions(&self) -> &[&'static str];

    async fn extract(&self, path: &Path) -> Result<String, TextExtractionError>;
}
