use crate::application::auth::RequiredSession;
use crate::application::http::authentication::validators::UpdateEmailValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use herbful_core::domain::authentication::ports::AuthService;

#[utoipa::path(
    put,
    path = "/email",
    tag = "authentication",
    summary = "Change email",
    description = "Re-verifies the current password and changes the email. Sessions stay valid with a refreshed payload.",
    request_body = UpdateEmailValidator,
    responses(
        (status = 204, description = "Email changed"),
        (status = 401, description = "Current password did not verify"),
        (status = 422, description = "Validation failed")
    ),
)]
pub async fn update_email(
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
    ValidateJson(payload): ValidateJson<UpdateEmailValidator>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .update_email(payload.current_password, payload.new_email)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
