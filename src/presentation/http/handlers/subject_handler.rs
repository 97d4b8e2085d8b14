use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::application::use_cases::{ListSubjectsUseCase, SystemStatsUseCase};
use crate::presentation::http::dto::{
    ApiResponse, SubjectCountDto, SubjectListResponseDto, SystemStatsDto,
};

pub struct SubjectHandler {
    list_subjects_use_case: Arc<ListSubjectsUseCase>,
    system_stats_use_case: Arc<SystemStatsUseCase>,
}

impl SubjectHandler {
    pub fn new(
        list_subjects_use_case: Arc<ListSubjectsUseCase>,
        system_stats_use_case: Arc<SystemStatsUseCase>,
    ) -> Self {
        Self {
            list_subjects_use_case,
            system_stats_use_case,
        }
    }

    pub async fn list_subjects(
        State(handler): State<Arc<SubjectHandler>>,
    ) -> Result<impl IntoResponse, StatusCode> {
        match handler.list_subjects_use_case.with_counts().await {
            Ok(counts) => {
                let subjects = counts.into_iter().map(SubjectCountDto::from).collect();
                Ok((
                    StatusCode::OK,
                    Json(ApiResponse::success(SubjectListResponseDto { subjects })),
                ))
            }
            Err(e) => Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<SubjectListResponseDto>::error(
                    "SUBJECTS_FAILED",
                    e.to_string(),
                )),
            )),
        }
    }

    pub async fn subject_names(
        State(handler): State<Arc<SubjectHandler>>,
    ) -> Result<impl IntoResponse, StatusCode> {
        match handler.list_subjects_use_case.names().await {
            Ok(names) => Ok((StatusCode::OK, Json(ApiResponse::success(names)))),
            Err(e) => Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<String>>::error("SUBJECTS_FAILED", e.to_string())),
            )),
        }
    }

    pub async fn system_stats(
        State(handler): State<Arc<SubjectHandler>>,
    ) -> Result<impl IntoResponse, StatusCode> {
        match handler.system_stats_use_case.execute().await {
            Ok(stats) => Ok((
                StatusCode::OK,
                Json(ApiResponse::success(SystemStatsDto::from(stats))),
            )),
            Err(e) => Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<SystemStatsDto>::error("STATS_FAILED", e.to_string())),
            )),
        }
    }
}
