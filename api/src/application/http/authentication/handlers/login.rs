use crate::application::http::authentication::validators::LoginValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use herbful_core::domain::authentication::entities::Session;
use herbful_core::domain::authentication::ports::AuthService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LoginResponse {
    pub data: Session,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "authentication",
    summary = "Log in",
    description = "Logs the admin in by username or email and issues a 24-hour bearer session.",
    request_body = LoginValidator,
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<LoginResponse>, ApiError> {
    let session = state
        .service
        .login(payload.identifier, payload.password)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse { data: session }))
}
