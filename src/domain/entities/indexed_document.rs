use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::UploadedFile;

/// Flattened projection of an [`UploadedFile`] plus its extracted text, as
/// submitted to the search indexer. Keyed by file id: re-processing a file
/// overwrites its previously indexed version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedDocument {
    pub id: Uuid,
    pub user_id: Uuid,
    pub original_name: String,
    pub stored_name: String,
    pub subject: String,
    pub category: String,
    pub extension: String,
    pub file_size: i64,
    /// Extracted body text; empty when extraction failed or produced nothing.
    /// The document stays searchable by name and metadata either way.
    pub content: String,
    pub created_at: String,
    pub indexed_at: String,
}

impl IndexedDocument {
    pub fn from_file(file: &UploadedFile, content: String) -> Self {
        Self {
            id: file.id(),
            user_id: file.user_id(),
            original_name: file.original_name().to_string(),
            stored_name: file.stored_name().to_string(),
            subject: file.subject().to_string(),
            category: file.category().as_str().to_string(),
            extension: file.extension().as_str().to_string(),
            file_size: file.file_size(),
            content,
            created_at: file.created_at().to_rfc3339(),
            indexed_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FileCategory;

    fn sample_file() -> UploadedFile {
        UploadedFile::new(
            Uuid::new_v4(),
            "f00.pdf".to_string(),
            "Past Exam 2024.pdf".to_string(),
            "uploads/f00.pdf".to_string(),
            "Databases".to_string(),
            FileCategory::Questions,
            512,
        )
    }

    #[test]
    fn test_projection_carries_metadata_and_content() {
        let file = sample_file();
        let doc = IndexedDocument::from_file(&file, "Hello world".to_string());

        assert_eq!(doc.id, file.id());
        assert_eq!(doc.subject, "Databases");
        assert_eq!(doc.category, "questions");
        assert_eq!(doc.extension, "pdf");
        assert_eq!(doc.content, "Hello world");
        assert_eq!(doc.created_at, file.created_at().to_rfc3339());
    }

    #[test]
    fn test_empty_content_is_allowed() {
        let file = sample_file();
        let doc = IndexedDocument::from_file(&file, String::new());

        assert!(doc.content.is_empty());
        assert_eq!(doc.original_name, "Past Exam 2024.pdf");
    }

    #[test]
    fn test_timestamps_are_rfc3339() {
        let file = sample_file();
        let doc = IndexedDocument::from_file(&file, String::new());

        assert!(chrono::DateTime::parse_from_rfc3339(&doc.created_at).is_ok());
        assert!(chrono::DateTime::parse_from_rfc3339(&doc.indexed_at).is_ok());
    }
}
