use axum::{Router, routing::get};
use std::sync::Arc;

use crate::presentation::http::handlers::SubjectHandler;

pub fn subject_routes(subject_handler: Arc<SubjectHandler>) -> Router {
    Router::new()
        .route("/subjects", get(SubjectHandler::list_subjects))
        .route("/subjects/names", get(SubjectHandler::subject_names))
        .route("/stats", get(SubjectHandler::system_stats))
        .with_state(subject_handler)
}
