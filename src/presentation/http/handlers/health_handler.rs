use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::application::ports::JobQueue;
use crate::presentation::http::dto::{ApiResponse, HealthResponseDto, MessageResponseDto};

/// Serves liveness plus a snapshot of the processing pipeline, so a probe
/// can tell an idle service from one drowning in queued jobs.
pub struct HealthHandler {
    job_queue: Arc<dyn JobQueue>,
    worker_count: usize,
}

impl HealthHandler {
    pub fn new(job_queue: Arc<dyn JobQueue>, worker_count: usize) -> Self {
        Self {
            job_queue,
            worker_count,
        }
    }

    fn snapshot(&self) -> HealthResponseDto {
        HealthResponseDto {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            queue_depth: self.job_queue.depth(),
            workers: self.worker_count,
        }
    }

    pub async fn root(State(_handler): State<Arc<HealthHandler>>) -> impl IntoResponse {
        (
            StatusCode::OK,
            Json(ApiResponse::success(MessageResponseDto {
                message: "studyshare is running".to_string(),
            })),
        )
    }

    pub async fn health(State(handler): State<Arc<HealthHandler>>) -> impl IntoResponse {
        (StatusCode::OK, Json(ApiResponse::success(handler.snapshot())))
    }
}
