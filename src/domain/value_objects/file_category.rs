use serde::{Deserialize, Serialize};

/// Fixed classification of an uploaded document within a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileCategory {
    Materials,
    Questions,
    Lectures,
    Seminars,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Materials => "materials",
            FileCategory::Questions => "questions",
            FileCategory::Lectures => "lectures",
            FileCategory::Seminars => "seminars",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "materials" => Ok(FileCategory::Materials),
            "questions" => Ok(FileCategory::Questions),
            "lectures" => Ok(FileCategory::Lectures),
            "seminars" => Ok(FileCategory::Seminars),
            _ => Err(format!("Invalid file category: {}", s)),
        }
    }

    pub fn all() -> &'static [FileCategory] {
        &[
            FileCategory::Materials,
            FileCategory::Questions,
            FileCategory::Lectures,
            FileCategory::Seminars,
        ]
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
