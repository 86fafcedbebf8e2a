use crate::application::auth::RequiredSession;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use herbful_core::domain::authentication::entities::SessionUser;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMeResponse {
    pub data: SessionUser,
}

#[utoipa::path(
    get,
    path = "/me",
    tag = "authentication",
    summary = "Current session",
    responses(
        (status = 200, body = GetMeResponse),
        (status = 401, description = "No valid session")
    ),
)]
pub async fn get_me(
    State(_state): State<AppState>,
    RequiredSession(user): RequiredSession,
) -> Result<Response<GetMeResponse>, ApiError> {
    Ok(Response::OK(GetMeResponse { data: user }))
}
