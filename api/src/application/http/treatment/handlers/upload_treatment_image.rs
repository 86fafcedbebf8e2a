use crate::application::auth::RequiredSession;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Multipart, Path, State};
use herbful_core::domain::storage::ports::StorageService;
use herbful_core::domain::storage::value_objects::{UploadTreatmentImageInput, UploadedImage};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10 MB

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UploadTreatmentImageResponse {
    pub data: UploadedImage,
}

#[utoipa::path(
    post,
    path = "/{treatment_id}/image",
    tag = "treatment",
    summary = "Upload treatment image",
    description = "Uploads an image via multipart form data and points the treatment at it. A replaced image is deleted best-effort.",
    params(
        ("treatment_id" = String, Path, description = "Treatment id"),
    ),
    responses(
        (status = 200, body = UploadTreatmentImageResponse),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Treatment not found"),
        (status = 413, description = "Image too large")
    ),
)]
pub async fn upload_treatment_image(
    Path(treatment_id): Path<String>,
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
    mut multipart: Multipart,
) -> Result<Response<UploadTreatmentImageResponse>, ApiError> {
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut payload: Option<bytes::Bytes> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {e}"))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        file_name = field.file_name().map(str::to_string);
        content_type = field.content_type().map(str::to_string);

        let data = field.bytes().await.map_err(|e| {
            error!("Failed to read file data: {}", e);
            ApiError::BadRequest(format!("Failed to read file data: {e}"))
        })?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "image exceeds the {MAX_IMAGE_SIZE} byte limit"
            )));
        }

        payload = Some(data);
    }

    let file_name =
        file_name.ok_or_else(|| ApiError::BadRequest("file name is required".to_string()))?;
    let payload =
        payload.ok_or_else(|| ApiError::BadRequest("file field is required".to_string()))?;
    let content_type = content_type.unwrap_or_else(|| "application/octet-stream".to_string());

    let image_url = state
        .service
        .upload_treatment_image(UploadTreatmentImageInput {
            treatment_id,
            file_name,
            content_type,
            payload,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UploadTreatmentImageResponse {
        data: UploadedImage { image_url },
    }))
}
