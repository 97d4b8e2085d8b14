use serde::Serialize;

use crate::domain::repositories::file_repository::{FileStats, SubjectCount};

#[derive(Debug, Serialize)]
pub struct SubjectCountDto {
    pub subject: String,
    pub file_count: i64,
}

impl From<SubjectCount> for SubjectCountDto {
    fn from(count: SubjectCount) -> Self {
        Self {
            subject: count.subject,
            file_count: count.file_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubjectListResponseDto {
    pub subjects: Vec<SubjectCountDto>,
}

#[derive(Debug, Serialize)]
pub struct SystemStatsDto {
    pub total_files: i64,
    pub total_bytes: i64,
    pub completed: i64,
    pub failed: i64,
    pub pending: i64,
}

impl From<FileStats> for SystemStatsDto {
    fn from(stats: FileStats) -> Self {
        Self {
            total_files: stats.total_files,
            total_bytes: stats.total_bytes,
            completed: stats.completed,
            failed: stats.failed,
            pending: stats.pending,
        }
    }
}
