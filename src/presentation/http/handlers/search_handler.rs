use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::{
    SearchDocumentsUseCase, search_documents::SearchDocumentsError,
};
use crate::presentation::http::dto::{
    ApiResponse, SearchHitDto, SearchQueryDto, SearchResponseDto,
};

pub struct SearchHandler {
    search_use_case: Arc<SearchDocumentsUseCase>,
}

impl SearchHandler {
    pub fn new(search_use_case: Arc<SearchDocumentsUseCase>) -> Self {
        Self { search_use_case }
    }

    pub async fn search(
        State(handler): State<Arc<SearchHandler>>,
        Query(query): Query<SearchQueryDto>,
    ) -> Result<impl IntoResponse, StatusCode> {
        match handler.search_use_case.execute(&query.q, query.limit).await {
            Ok(hits) => {
                let hits: Vec<SearchHitDto> = hits.into_iter().map(SearchHitDto::from).collect();
                let count = hits.len();
                Ok((
                    StatusCode::OK,
                    Json(ApiResponse::success(SearchResponseDto {
                        query: query.q,
                        hits,
                        count,
                    })),
                ))
            }
            Err(SearchDocumentsError::ValidationError(msg)) => Ok((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<SearchResponseDto>::error("INVALID_QUERY", msg)),
            )),
            Err(e) => Ok((
                StatusCode::BAD_GATEWAY,
                Json(ApiResponse::<SearchResponseDto>::error("SEARCH_FAILED", e.to_string())),
            )),
        }
    }
}
