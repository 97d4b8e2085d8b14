use async_trait::async_trait;
use diesel::dsl::count_star;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::UploadedFile;
use crate::domain::repositories::file_repository::{
    FileRepository, FileRepositoryError, FileStats, SubjectCount,
};
use crate::domain::value_objects::ProcessingStatus;
use crate::infrastructure::database::connection::{DbPool, get_connection_from_pool};
use crate::infrastructure::database::models::{NewUploadedFileModel, UploadedFileModel};
use crate::infrastructure::database::schema::uploaded_files::dsl::*;

pub struct PostgresFileRepository {
    pool: DbPool,
}

impl PostgresFileRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn connection(
        &self,
    ) -> Result<crate::infrastructure::database::connection::DbConnection, FileRepositoryError>
    {
        get_connection_from_pool(&self.pool)
            .map_err(|e| FileRepositoryError::DatabaseError(e.to_string()))
    }

    fn to_domain(models: Vec<UploadedFileModel>) -> Result<Vec<UploadedFile>, FileRepositoryError> {
        let mut domain_files = Vec::with_capacity(models.len());
        for model in models {
            let domain_file =
                UploadedFile::try_from(model).map_err(FileRepositoryError::ValidationError)?;
            domain_files.push(domain_file);
        }
        Ok(domain_files)
    }
}

#[async_trait]
impl FileRepository for PostgresFileRepository {
    async fn save(&self, file: &UploadedFile) -> Result<Uuid, FileRepositoryError> {
        let mut conn = self.connection()?;

        let new_file = NewUploadedFileModel::from(file);

        let inserted: UploadedFileModel = diesel::insert_into(uploaded_files)
            .values(&new_file)
            .get_result(&mut conn)
            .map_err(|e| FileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.id)
    }

    async fn find_by_id(&self, file_id: Uuid) -> Result<Option<UploadedFile>, FileRepositoryError> {
        let mut conn = self.connection()?;

        let result = uploaded_files
            .find(file_id)
            .first::<UploadedFileModel>(&mut conn)
            .optional()
            .map_err(|e| FileRepositoryError::DatabaseError(e.to_string()))?;

        match result {
            Some(model) => {
                let domain_file =
                    UploadedFile::try_from(model).map_err(FileRepositoryError::ValidationError)?;
                Ok(Some(domain_file))
            }
            None => Ok(None),
        }
    }

    async fn find_all(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<UploadedFile>, FileRepositoryError> {
        let mut conn = self.connection()?;

        let models = uploaded_files
            .order(created_at.desc())
            .offset(skip)
            .limit(limit)
            .load::<UploadedFileModel>(&mut conn)
            .map_err(|e| FileRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_domain(models)
    }

    async fn find_by_subject(
        &self,
        subject_name: &str,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<UploadedFile>, FileRepositoryError> {
        let mut conn = self.connection()?;

        let models = uploaded_files
            .filter(subject.eq(subject_name))
            .order(created_at.desc())
            .offset(skip)
            .limit(limit)
            .load::<UploadedFileModel>(&mut conn)
            .map_err(|e| FileRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_domain(models)
    }

    async fn update(&self, file: &UploadedFile) -> Result<(), FileRepositoryError> {
        let mut conn = self.connection()?;

        let update_model = NewUploadedFileModel::from(file);

        let updated = diesel::update(uploaded_files.find(file.id()))
            .set(&update_model)
            .execute(&mut conn)
            .map_err(|e| FileRepositoryError::DatabaseError(e.to_string()))?;

        if updated == 0 {
            return Err(FileRepositoryError::NotFound(file.id()));
        }
        Ok(())
    }

    async fn delete(&self, file_id: Uuid) -> Result<bool, FileRepositoryError> {
        let mut conn = self.connection()?;

        let deleted_count = diesel::delete(uploaded_files.find(file_id))
            .execute(&mut conn)
            .map_err(|e| FileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(deleted_count > 0)
    }

    async fn count(&self) -> Result<i64, FileRepositoryError> {
        let mut conn = self.connection()?;

        uploaded_files
            .count()
            .get_result(&mut conn)
            .map_err(|e| FileRepositoryError::DatabaseError(e.to_string()))
    }

    async fn subjects_with_counts(&self) -> Result<Vec<SubjectCount>, FileRepositoryError> {
        let mut conn = self.connection()?;

        let rows: Vec<(String, i64)> = uploaded_files
            .group_by(subject)
            .select((subject, count_star()))
            .order(subject.asc())
            .load(&mut conn)
            .map_err(|e| FileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(name, file_count)| SubjectCount {
                subject: name,
                file_count,
            })
            .collect())
    }

    async fn subject_names(&self) -> Result<Vec<String>, FileRepositoryError> {
        let mut conn = self.connection()?;

        uploaded_files
            .select(subject)
            .distinct()
            .order(subject.asc())
            .load(&mut conn)
            .map_err(|e| FileRepositoryError::DatabaseError(e.to_string()))
    }

    async fn stats(&self) -> Result<FileStats, FileRepositoryError> {
        let mut conn = self.connection()?;

        let total_files: i64 = uploaded_files
            .count()
            .get_result(&mut conn)
            .map_err(|e| FileRepositoryError::DatabaseError(e.to_string()))?;

        // SUM(bigint) is NUMERIC in Postgres; cast back so diesel loads an i64.
        let total_bytes: i64 = uploaded_files
            .select(diesel::dsl::sql::<diesel::sql_types::BigInt>(
                "COALESCE(SUM(file_size), 0)::bigint",
            ))
            .first(&mut conn)
            .map_err(|e| FileRepositoryError::DatabaseError(e.to_string()))?;

        let status_rows: Vec<(String, i64)> = uploaded_files
            .group_by(processing_status)
            .select((processing_status, count_star()))
            .load(&mut conn)
            .map_err(|e| FileRepositoryError::DatabaseError(e.to_string()))?;

        let mut stats = FileStats {
            total_files,
            total_bytes,
            ..FileStats::default()
        };
        for (status_name, status_count) in status_rows {
            match ProcessingStatus::parse(&status_name) {
                Ok(ProcessingStatus::Completed) => stats.completed = status_count,
                Ok(ProcessingStatus::Failed) => stats.failed = status_count,
                Ok(ProcessingStatus::Pending) | Ok(ProcessingStatus::Processing) => {
                    stats.pending += status_count
                }
                Err(e) => return Err(FileRepositoryError::ValidationError(e)),
            }
        }

        Ok(stats)
    }
}
