use crate::application::auth::RequiredSession;
use crate::application::http::authentication::validators::UpdatePasswordValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use herbful_core::domain::authentication::ports::AuthService;

#[utoipa::path(
    put,
    path = "/password",
    tag = "authentication",
    summary = "Change password",
    description = "Re-verifies the current password and changes it. All sessions are invalidated.",
    request_body = UpdatePasswordValidator,
    responses(
        (status = 204, description = "Password changed, sessions invalidated"),
        (status = 401, description = "Current password did not verify"),
        (status = 422, description = "Validation failed")
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
    ValidateJson(payload): ValidateJson<UpdatePasswordValidator>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .update_password(payload.current_password, payload.new_password)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
