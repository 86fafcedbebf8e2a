use crate::application::auth::RequiredSession;
use crate::application::http::authentication::validators::UpdateUsernameValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use herbful_core::domain::authentication::ports::AuthService;

#[utoipa::path(
    put,
    path = "/username",
    tag = "authentication",
    summary = "Change username",
    description = "Re-verifies the current password and changes the username. All sessions are invalidated.",
    request_body = UpdateUsernameValidator,
    responses(
        (status = 204, description = "Username changed, sessions invalidated"),
        (status = 401, description = "Current password did not verify"),
        (status = 422, description = "Validation failed")
    ),
)]
pub async fn update_username(
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
    ValidateJson(payload): ValidateJson<UpdateUsernameValidator>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .update_username(payload.current_password, payload.new_username)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
