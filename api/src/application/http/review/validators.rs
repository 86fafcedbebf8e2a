use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::treatment::validators::double_option;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReviewValidator {
    #[validate(length(min = 1, message = "treatment_id is required"))]
    pub treatment_id: String,

    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: u8,

    #[serde(default)]
    pub comment: String,

    #[serde(default)]
    pub user_name: String,

    #[serde(default)]
    pub user_email: String,

    #[serde(default)]
    pub anonymous: bool,

    #[serde(default)]
    pub admin_notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateReviewValidator {
    #[serde(default)]
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: Option<u8>,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub user_name: Option<String>,

    #[serde(default)]
    pub user_email: Option<String>,

    #[serde(default)]
    pub anonymous: Option<bool>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub admin_notes: Option<Option<String>>,
}
