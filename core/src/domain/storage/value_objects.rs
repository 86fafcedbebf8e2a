use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UploadedImage {
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct UploadTreatmentImageInput {
    pub treatment_id: String,
    pub file_name: String,
    pub content_type: String,
    pub payload: bytes::Bytes,
}
