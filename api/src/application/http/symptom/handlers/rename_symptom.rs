use crate::application::auth::RequiredSession;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::symptom::validators::RenameSymptomValidator;
use axum::extract::State;
use herbful_core::domain::symptom::ports::SymptomService;

#[utoipa::path(
    post,
    path = "/rename",
    tag = "symptom",
    summary = "Rename symptom",
    description = "Replaces exact matches of the old name in every treatment's symptom list, then rebuilds the index.",
    request_body = RenameSymptomValidator,
    responses(
        (status = 204, description = "Symptom renamed"),
        (status = 422, description = "Validation failed")
    ),
)]
pub async fn rename_symptom(
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
    ValidateJson(payload): ValidateJson<RenameSymptomValidator>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .rename_symptom(payload.old_name, payload.new_name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
