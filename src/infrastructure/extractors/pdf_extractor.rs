use async_trait::async_trait;
use lopdf::{Document, Object};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::path::Path;

use crate::application::ports::text_extractor::{TextExtractionError, TextExtractor};

/// PDF text extraction backed by lopdf, pages extracted in parallel.
///
/// Encrypted and image-only (scanned) documents yield empty text instead of
/// an error; the file stays indexable by its metadata.
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    // Dictionary keys that carry rendering detail irrelevant to text
    // extraction; stripping them keeps parsing cheap on large files.
    fn filter_func(object_id: (u32, u16), object: &mut Object) -> Option<((u32, u16), Object)> {
        static IGNORE: &[&[u8]] = &[
            b"Length",
            b"BBox",
            b"Matrix",
            b"Filter",
            b"ColorSpace",
            b"Width",
            b"Height",
            b"BitsPerComponent",
            b"FontDescriptor",
            b"ExtGState",
            b"MediaBox",
        ];

        if let Object::Dictionary(dict) = object {
            let keys_to_remove: Vec<_> = dict
                .iter()
                .filter_map(|(key, _)| {
                    if IGNORE.contains(&key.as_slice()) {
                        Some(key.clone())
                    } else {
                        None
                    }
                })
                .collect();
            for key in keys_to_remove {
                dict.remove(&key);
            }
        }

        Some((object_id, object.to_owned()))
    }

    fn extract_from_document(doc: &Document) -> String {
        let pages = doc.get_pages();

        let extracted_pages: Vec<Option<String>> = pages
            .into_par_iter()
            .map(|(page_num, _)| doc.extract_text(&[page_num]).ok())
            .collect();

        let mut lines: Vec<String> = Vec::new();
        for page_text in extracted_pages.into_iter().flatten() {
            lines.extend(
                page_text
                    .split('\n')
                    .map(|s| s.trim_end().to_string())
                    .filter(|s| !s.is_empty()),
            );
        }

        lines.join("\n")
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for PdfExtractor {
    fn supported_extensions(&self) -> &[&'static str] {
        &["pdf"]
    }

    async fn extract(&self, path: &Path) -> Result<String, TextExtractionError> {
        let path = path.to_path_buf();

        // Parsing is CPU-bound; keep it off the async workers.
        let text = tokio::task::spawn_blocking(move || {
            let doc = Document::load_filtered(&path, Self::filter_func)
                .map_err(|e| TextExtractionError::CorruptedFile(e.to_string()))?;

            if doc.is_encrypted() {
                // No password available; fall back to metadata-only search.
                return Ok(String::new());
            }

            Ok(Self::extract_from_document(&doc))
        })
        .await
        .map_err(|e| TextExtractionError::ExtractionFailed(e.to_string()))??;

        // A scanned PDF parses fine but carries no text layer.
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreadable_bytes_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-pdf.pdf");
        tokio::fs::write(&path, b"plain text, no pdf header")
            .await
            .unwrap();

        let result = PdfExtractor::new().extract(&path).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let result = PdfExtractor::new()
            .extract(Path::new("/nonexistent/file.pdf"))
            .await;
        assert!(result.is_err());
    }
}
