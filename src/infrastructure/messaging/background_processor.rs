use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::application::services::{FileProcessingJob, RetryError, RetryPolicy};
use crate::infrastructure::messaging::MpscJobQueueReceiver;

/// Worker pool that drains the job queue and runs the file processing job
/// under the retry policy. The job is unaware of attempts; this layer owns
/// the budget and invokes the exhaustion handler when it gives up.
pub struct BackgroundProcessor {
    job_receiver: Arc<MpscJobQueueReceiver>,
    job: Arc<FileProcessingJob>,
    retry_policy: RetryPolicy,
    worker_count: usize,
}

impl BackgroundProcessor {
    pub fn new(
        job_receiver: Arc<MpscJobQueueReceiver>,
        job: Arc<FileProcessingJob>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            job_receiver,
            job,
            retry_policy,
            worker_count: 3,
        }
    }

    pub fn with_worker_count(mut self, count: usize) -> Self {
        self.worker_count = count.max(1);
        self
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub async fn start(&self) {
        info!(workers = self.worker_count, "Starting background processor");

        let mut handles = Vec::new();
        for worker_id in 0..self.worker_count {
            let processor = self.clone_for_worker();
            handles.push(tokio::spawn(async move {
                processor.worker_loop(worker_id).await;
            }));
        }

        for (worker_id, handle) in handles.into_iter().enumerate() {
            if let Err(e) = handle.await {
                error!(worker_id, error = %e, "Worker panicked");
            }
        }

        info!("Background processor stopped");
    }

    async fn worker_loop(&self, worker_id: usize) {
        info!(worker_id, "Worker started");

        while let Some(file_id) = self.job_receiver.recv().await {
            info!(worker_id, file_id = %file_id, "Processing file");
            self.run_one(file_id).await;
        }

        info!(worker_id, "Worker stopped, queue closed");
    }

    /// One queue item, end to end: run the job under the retry policy and,
    /// if the budget runs out, let the job record the exhaustion.
    async fn run_one(&self, file_id: Uuid) {
        let job = self.job.clone();
        let outcome = self
            .retry_policy
            .run(|| {
                let job = job.clone();
                async move { job.run(file_id).await.map_err(|e| e.to_string()) }
            })
            .await;

        if let Err(RetryError::Exhausted {
            attempts,
            last_error,
        }) = outcome
        {
            self.job
                .mark_retries_exhausted(file_id, attempts, &last_error)
                .await;
        }
    }

    fn clone_for_worker(&self) -> Self {
        Self {
            job_receiver: self.job_receiver.clone(),
            job: self.job.clone(),
            retry_policy: self.retry_policy.clone(),
            worker_count: self.worker_count,
        }
    }
}
