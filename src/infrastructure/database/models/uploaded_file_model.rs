use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::UploadedFile;
use crate::domain::value_objects::{FileCategory, FileExtension, ProcessingStatus};
use crate::infrastructure::database::schema::uploaded_files;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Identifiable)]
#[diesel(table_name = uploaded_files)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UploadedFileModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub stored_name: String,
    pub original_name: String,
    pub storage_path: String,
    pub subject: String,
    pub category: String,
    pub file_size: i64,
    pub extension: String,
    pub processing_status: String,
    pub processing_error: Option<String>,
    pub processed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable, AsChangeset, Deserialize)]
#[diesel(table_name = uploaded_files)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewUploadedFileModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub stored_name: String,
    pub original_name: String,
    pub storage_path: String,
    pub subject: String,
    pub category: String,
    pub file_size: i64,
    pub extension: String,
    pub processing_status: String,
    pub processing_error: Option<String>,
    pub processed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&UploadedFile> for NewUploadedFileModel {
    fn from(file: &UploadedFile) -> Self {
        Self {
            id: file.id(),
            user_id: file.user_id(),
            stored_name: file.stored_name().to_string(),
            original_name: file.original_name().to_string(),
            storage_path: file.storage_path().to_string(),
            subject: file.subject().to_string(),
            category: file.category().as_str().to_string(),
            file_size: file.file_size(),
            extension: file.extension().as_str().to_string(),
            processing_status: file.processing_status().as_str().to_string(),
            processing_error: file.processing_error().map(|e| e.to_string()),
            processed_at: file.processed_at(),
            created_at: file.created_at(),
            updated_at: file.updated_at(),
        }
    }
}

impl TryFrom<UploadedFileModel> for UploadedFile {
    type Error = String;

    fn try_from(model: UploadedFileModel) -> Result<Self, Self::Error> {
        let category = FileCategory::parse(&model.category)?;
        let status = ProcessingStatus::parse(&model.processing_status)?;

        Ok(UploadedFile::from_database(
            model.id,
            model.user_id,
            model.stored_name,
            model.original_name,
            model.storage_path,
            model.subject,
            category,
            model.file_size,
            FileExtension::new(&model.extension),
            status,
            model.processing_error,
            model.processed_at,
            model.created_at,
            model.updated_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> UploadedFile {
        UploadedFile::new(
            Uuid::new_v4(),
            "stored.pdf".to_string(),
            "Calculus Homework.pdf".to_string(),
            "uploads/stored.pdf".to_string(),
            "Calculus".to_string(),
            FileCategory::Questions,
            512,
        )
    }

    #[test]
    fn test_round_trip_through_model() {
        let file = sample_file();
        let new_model = NewUploadedFileModel::from(&file);

        let model = UploadedFileModel {
            id: new_model.id,
            user_id: new_model.user_id,
            stored_name: new_model.stored_name.clone(),
            original_name: new_model.original_name.clone(),
            storage_path: new_model.storage_path.clone(),
            subject: new_model.subject.clone(),
            category: new_model.category.clone(),
            file_size: new_model.file_size,
            extension: new_model.extension.clone(),
            processing_status: new_model.processing_status.clone(),
            processing_error: new_model.processing_error.clone(),
            processed_at: new_model.processed_at,
            created_at: new_model.created_at,
            updated_at: new_model.updated_at,
        };

        let restored = UploadedFile::try_from(model).unwrap();
        assert_eq!(restored, file);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let file = sample_file();
        let new_model = NewUploadedFileModel::from(&file);

        let model = UploadedFileModel {
            id: new_model.id,
            user_id: new_model.user_id,
            stored_name: new_model.stored_name.clone(),
            original_name: new_model.original_name.clone(),
            storage_path: new_model.storage_path.clone(),
            subject: new_model.subject.clone(),
            category: new_model.category.clone(),
            file_size: new_model.file_size,
            extension: new_model.extension.clone(),
            processing_status: "archived".to_string(),
            processing_error: None,
            processed_at: None,
            created_at: new_model.created_at,
            updated_at: new_model.updated_at,
        };

        assert!(UploadedFile::try_from(model).is_err());
    }
}
