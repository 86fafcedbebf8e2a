use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    /// Username or email.
    #[validate(length(min = 1, message = "identifier is required"))]
    pub identifier: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUsernameValidator {
    #[validate(length(min = 1, message = "current_password is required"))]
    pub current_password: String,

    #[validate(length(min = 1, message = "new_username is required"))]
    pub new_username: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEmailValidator {
    #[validate(length(min = 1, message = "current_password is required"))]
    pub current_password: String,

    #[validate(email(message = "new_email must be a valid email address"))]
    pub new_email: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePasswordValidator {
    #[validate(length(min = 1, message = "current_password is required"))]
    pub current_password: String,

    #[validate(length(min = 1, message = "new_password is required"))]
    pub new_password: String,
}
