use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use herbful_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST", msg.clone()),
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED", msg.clone())
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "E_NOT_FOUND", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "E_CONFLICT", msg.clone()),
            ApiError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "E_UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            ApiError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "E_INTERNAL_SERVER_ERROR",
                msg.clone(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let body = ErrorResponse {
            code: code.to_string(),
            message,
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("resource not found".to_string()),
            CoreError::ValidationFailed(msg) => ApiError::UnprocessableEntity(msg),
            CoreError::SlugConflict(slug) => {
                ApiError::Conflict(format!("a treatment with slug '{slug}' already exists"))
            }
            CoreError::InvalidCredentials => {
                ApiError::Unauthorized("invalid credentials".to_string())
            }
            CoreError::SessionExpired => ApiError::Unauthorized("session expired".to_string()),
            CoreError::Unauthorized => {
                ApiError::Unauthorized("authentication required".to_string())
            }
            CoreError::UpstreamReadFailed(_)
            | CoreError::UpstreamWriteFailed(_)
            | CoreError::ObjectStorageError(_)
            | CoreError::InternalServerError => {
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

/// JSON extractor that runs `validator` rules before the handler sees the
/// payload.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        payload
            .validate()
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

        Ok(ValidateJson(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_the_expected_statuses() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (
                CoreError::ValidationFailed("x".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                CoreError::SlugConflict("ginger-tea".to_string()),
                StatusCode::CONFLICT,
            ),
            (CoreError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (CoreError::SessionExpired, StatusCode::UNAUTHORIZED),
            (CoreError::Unauthorized, StatusCode::UNAUTHORIZED),
            (
                CoreError::UpstreamReadFailed("x".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (core_error, expected) in cases {
            let (status, _, _) = ApiError::from(core_error).parts();
            assert_eq!(status, expected);
        }
    }
}
