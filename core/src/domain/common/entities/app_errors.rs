use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("a treatment with slug '{0}' already exists")]
    SlugConflict(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("session expired")]
    SessionExpired,

    #[error("authentication required")]
    Unauthorized,

    #[error("upstream read failed: {0}")]
    UpstreamReadFailed(String),

    #[error("upstream write failed: {0}")]
    UpstreamWriteFailed(String),

    #[error("object storage error: {0}")]
    ObjectStorageError(String),

    #[error("internal server error")]
    InternalServerError,
}
