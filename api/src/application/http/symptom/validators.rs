use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RenameSymptomValidator {
    #[validate(length(min = 1, message = "old_name is required"))]
    pub old_name: String,

    #[validate(length(min = 1, message = "new_name is required"))]
    pub new_name: String,
}
