use serde::{Deserialize, Serialize};

/// A declared file extension, normalized to lowercase with no leading dot.
/// Extractor dispatch keys on this value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileExtension(String);

impl FileExtension {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().trim_start_matches('.').to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Extension of a file name, or an empty extension when it has none.
    pub fn from_file_name(file_name: &str) -> Self {
        match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => Self::new(ext),
            _ => Self(String::new()),
        }
    }
}

impl std::fmt::Display for FileExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(FileExtension::new("PDF").as_str(), "pdf");
        assert_eq!(FileExtension::new(".Docx").as_str(), "docx");
        assert_eq!(FileExtension::new(" txt ").as_str(), "txt");
    }

    #[test]
    fn test_from_file_name() {
        assert_eq!(FileExtension::from_file_name("notes.PDF").as_str(), "pdf");
        assert_eq!(
            FileExtension::from_file_name("archive.tar.gz").as_str(),
            "gz"
        );
        assert!(FileExtension::from_file_name("README").is_empty());
        assert!(FileExtension::from_file_name(".gitignore").is_empty());
    }
}
