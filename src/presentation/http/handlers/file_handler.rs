use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_cases::{
    DeleteFileUseCase, GetFileUseCase, ListFilesUseCase, QueueProcessingUseCase,
    UploadFileUseCase, delete_file::DeleteFileError, get_file::GetFileError,
    list_files::ListFilesRequest, queue_processing::QueueProcessingError,
    upload_file::UploadFileRequest,
};
use crate::presentation::http::dto::{
    ApiResponse, FileListQueryDto, FileListResponseDto, FileResponseDto, MessageResponseDto,
    UploadResponseDto,
};

pub struct FileHandler {
    upload_use_case: Arc<UploadFileUseCase>,
    list_files_use_case: Arc<ListFilesUseCase>,
    get_file_use_case: Arc<GetFileUseCase>,
    delete_file_use_case: Arc<DeleteFileUseCase>,
    queue_processing_use_case: Arc<QueueProcessingUseCase>,
}

impl FileHandler {
    pub fn new(
        upload_use_case: Arc<UploadFileUseCase>,
        list_files_use_case: Arc<ListFilesUseCase>,
        get_file_use_case: Arc<GetFileUseCase>,
        delete_file_use_case: Arc<DeleteFileUseCase>,
        queue_processing_use_case: Arc<QueueProcessingUseCase>,
    ) -> Self {
        Self {
            upload_use_case,
            list_files_use_case,
            get_file_use_case,
            delete_file_use_case,
            queue_processing_use_case,
        }
    }

    /// Multipart upload: one `file` part plus `subject`, `category` and
    /// `user_id` text parts.
    pub async fn upload_file(
        State(handler): State<Arc<FileHandler>>,
        mut multipart: Multipart,
    ) -> Result<impl IntoResponse, StatusCode> {
        let mut file_name: Option<String> = None;
        let mut file_data: Option<Vec<u8>> = None;
        let mut subject: Option<String> = None;
        let mut category: Option<String> = None;
        let mut user_id: Option<Uuid> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?
        {
            match field.name() {
                Some("file") => {
                    file_name = field.file_name().map(|n| n.to_string());
                    file_data = Some(
                        field
                            .bytes()
                            .await
                            .map_err(|_| StatusCode::BAD_REQUEST)?
                            .to_vec(),
                    );
                }
                Some("subject") => {
                    subject = Some(field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?);
                }
                Some("category") => {
                    category = Some(field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?);
                }
                Some("user_id") => {
                    let raw = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
                    user_id = Some(raw.parse().map_err(|_| StatusCode::BAD_REQUEST)?);
                }
                _ => {}
            }
        }

        let (Some(file_name), Some(file_data), Some(subject), Some(category), Some(user_id)) =
            (file_name, file_data, subject, category, user_id)
        else {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<UploadResponseDto>::error(
                    "MISSING_FIELDS",
                    "Expected parts: file, subject, category, user_id",
                )),
            ));
        };

        let request = UploadFileRequest {
            user_id,
            file_name,
            subject,
            category,
            file_data,
        };

        match handler.upload_use_case.execute(request).await {
            Ok(response) => {
                let dto = UploadResponseDto::from(response);
                Ok((StatusCode::CREATED, Json(ApiResponse::success(dto))))
            }
            Err(e) => Ok((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("UPLOAD_FAILED", e.to_string())),
            )),
        }
    }

    pub async fn list_files(
        State(handler): State<Arc<FileHandler>>,
        Query(query): Query<FileListQueryDto>,
    ) -> Result<impl IntoResponse, StatusCode> {
        let request = ListFilesRequest {
            subject: query.subject,
            skip: Some(query.skip),
            limit: Some(query.limit),
        };

        match handler.list_files_use_case.execute(request).await {
            Ok(files) => {
                let files: Vec<FileResponseDto> =
                    files.into_iter().map(FileResponseDto::from).collect();
                let count = files.len();
                Ok((
                    StatusCode::OK,
                    Json(ApiResponse::success(FileListResponseDto { files, count })),
                ))
            }
            Err(e) => Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<FileListResponseDto>::error("LIST_FAILED", e.to_string())),
            )),
        }
    }

    pub async fn get_file(
        State(handler): State<Arc<FileHandler>>,
        Path(file_id): Path<Uuid>,
    ) -> Result<impl IntoResponse, StatusCode> {
        match handler.get_file_use_case.execute(file_id).await {
            Ok(file) => Ok((
                StatusCode::OK,
                Json(ApiResponse::success(FileResponseDto::from(file))),
            )),
            Err(GetFileError::NotFound(_)) => Ok((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<FileResponseDto>::error(
                    "FILE_NOT_FOUND",
                    format!("File not found: {}", file_id),
                )),
            )),
            Err(e) => Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<FileResponseDto>::error("GET_FAILED", e.to_string())),
            )),
        }
    }

    pub async fn delete_file(
        State(handler): State<Arc<FileHandler>>,
        Path(file_id): Path<Uuid>,
    ) -> Result<impl IntoResponse, StatusCode> {
        match handler.delete_file_use_case.execute(file_id).await {
            Ok(()) => Ok((
                StatusCode::OK,
                Json(ApiResponse::success(MessageResponseDto {
                    message: format!("File {} deleted", file_id),
                })),
            )),
            Err(DeleteFileError::NotFound(_)) => Ok((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<MessageResponseDto>::error(
                    "FILE_NOT_FOUND",
                    format!("File not found: {}", file_id),
                )),
            )),
            Err(e) => Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<MessageResponseDto>::error("DELETE_FAILED", e.to_string())),
            )),
        }
    }

    /// Manual (re-)enqueue of the processing job, including failed records.
    pub async fn reprocess_file(
        State(handler): State<Arc<FileHandler>>,
        Path(file_id): Path<Uuid>,
    ) -> Result<impl IntoResponse, StatusCode> {
        match handler.queue_processing_use_case.execute(file_id).await {
            Ok(()) => Ok((
                StatusCode::ACCEPTED,
                Json(ApiResponse::success(MessageResponseDto {
                    message: format!("Processing queued for file {}", file_id),
                })),
            )),
            Err(QueueProcessingError::NotFound(_)) => Ok((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<MessageResponseDto>::error(
                    "FILE_NOT_FOUND",
                    format!("File not found: {}", file_id),
                )),
            )),
            Err(e) => Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<MessageResponseDto>::error("QUEUE_FAILED", e.to_string())),
            )),
        }
    }
}
