use std::{path::PathBuf, sync::Arc};

use crate::{
    application::{
        ports::{CacheInvalidator, CacheStore, FileStorage, JobQueue, SearchIndexer},
        services::{ExtractorRegistry, FileProcessingJob, RetryPolicy},
        use_cases::{
            DeleteFileUseCase, GetFileUseCase, ListFilesUseCase, ListSubjectsUseCase,
            QueueProcessingUseCase, SearchDocumentsUseCase, SystemStatsUseCase, UploadFileUseCase,
        },
    },
    domain::repositories::FileRepository,
    infrastructure::{
        cache::InMemoryTaggedCache,
        database::{PostgresFileRepository, create_connection_pool, run_migrations},
        extractors::default_registry,
        file_system::LocalFileStorage,
        messaging::{BackgroundProcessor, MpscJobQueue},
        search::HttpSearchIndexer,
    },
    presentation::http::handlers::{FileHandler, HealthHandler, SearchHandler, SubjectHandler},
};

pub struct AppContainer {
    // Repositories
    pub file_repository: Arc<dyn FileRepository>,

    // External services
    pub file_storage: Arc<dyn FileStorage>,
    pub search_indexer: Arc<dyn SearchIndexer>,
    pub extractors: Arc<ExtractorRegistry>,
    pub cache: Arc<InMemoryTaggedCache>,

    // Job queue and background processing
    pub job_queue: Arc<dyn JobQueue>,
    pub processing_job: Arc<FileProcessingJob>,
    pub background_processor: Arc<BackgroundProcessor>,

    // Use cases
    pub upload_file_use_case: Arc<UploadFileUseCase>,
    pub list_files_use_case: Arc<ListFilesUseCase>,
    pub get_file_use_case: Arc<GetFileUseCase>,
    pub delete_file_use_case: Arc<DeleteFileUseCase>,
    pub queue_processing_use_case: Arc<QueueProcessingUseCase>,
    pub search_documents_use_case: Arc<SearchDocumentsUseCase>,
    pub list_subjects_use_case: Arc<ListSubjectsUseCase>,
    pub system_stats_use_case: Arc<SystemStatsUseCase>,

    // HTTP handlers
    pub file_handler: Arc<FileHandler>,
    pub search_handler: Arc<SearchHandler>,
    pub subject_handler: Arc<SubjectHandler>,
    pub health_handler: Arc<HealthHandler>,
}

impl AppContainer {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let db_pool = create_connection_pool()?;
        run_migrations(&db_pool)?;

        let file_repository: Arc<dyn FileRepository> =
            Arc::new(PostgresFileRepository::new(db_pool));

        let upload_dir =
            PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()));
        tokio::fs::create_dir_all(&upload_dir).await?;
        let file_storage: Arc<dyn FileStorage> = Arc::new(LocalFileStorage::new(upload_dir));

        let search_indexer: Arc<dyn SearchIndexer> = Arc::new(HttpSearchIndexer::from_env()?);

        let extractors = Arc::new(default_registry());

        let cache = Arc::new(InMemoryTaggedCache::new());
        let cache_invalidator: Arc<dyn CacheInvalidator> = cache.clone();
        let cache_store: Arc<dyn CacheStore> = cache.clone();

        let (job_queue, job_receiver) = MpscJobQueue::create_pair();
        let job_queue: Arc<dyn JobQueue> = Arc::new(job_queue);
        let job_receiver = Arc::new(job_receiver);

        let processing_job = Arc::new(FileProcessingJob::new(
            file_repository.clone(),
            file_storage.clone(),
            extractors.clone(),
            search_indexer.clone(),
            cache_invalidator.clone(),
        ));

        let worker_count = std::env::var("WORKER_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let background_processor = Arc::new(
            BackgroundProcessor::new(
                job_receiver,
                processing_job.clone(),
                RetryPolicy::default(),
            )
            .with_worker_count(worker_count),
        );

        let upload_file_use_case = Arc::new(UploadFileUseCase::new(
            file_repository.clone(),
            file_storage.clone(),
            job_queue.clone(),
            cache_invalidator.clone(),
        ));
        let list_files_use_case = Arc::new(ListFilesUseCase::new(file_repository.clone()));
        let get_file_use_case = Arc::new(GetFileUseCase::new(file_repository.clone()));
        let delete_file_use_case = Arc::new(DeleteFileUseCase::new(
            file_repository.clone(),
            file_storage.clone(),
            search_indexer.clone(),
            cache_invalidator.clone(),
        ));
        let queue_processing_use_case = Arc::new(QueueProcessingUseCase::new(
            file_repository.clone(),
            job_queue.clone(),
        ));
        let search_documents_use_case =
            Arc::new(SearchDocumentsUseCase::new(search_indexer.clone()));
        let list_subjects_use_case = Arc::new(ListSubjectsUseCase::new(
            file_repository.clone(),
            cache_store.clone(),
        ));
        let system_stats_use_case = Arc::new(SystemStatsUseCase::new(
            file_repository.clone(),
            cache_store.clone(),
        ));

        let file_handler = Arc::new(FileHandler::new(
            upload_file_use_case.clone(),
            list_files_use_case.clone(),
            get_file_use_case.clone(),
            delete_file_use_case.clone(),
            queue_processing_use_case.clone(),
        ));
        let search_handler = Arc::new(SearchHandler::new(search_documents_use_case.clone()));
        let subject_handler = Arc::new(SubjectHandler::new(
            list_subjects_use_case.clone(),
            system_stats_use_case.clone(),
        ));
        let health_handler = Arc::new(HealthHandler::new(
            job_queue.clone(),
            background_processor.worker_count(),
        ));

        Ok(Self {
            file_repository,
            file_storage,
            search_indexer,
            extractors,
            cache,
            job_queue,
            processing_job,
            background_processor,
            upload_file_use_case,
            list_files_use_case,
            get_file_use_case,
            delete_file_use_case,
            queue_processing_use_case,
            search_documents_use_case,
            list_subjects_use_case,
            system_stats_use_case,
            file_handler,
            search_handler,
            subject_handler,
            health_handler,
        })
    }
}
