use crate::application::auth::RequiredSession;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use herbful_core::domain::treatment::ports::TreatmentService;

#[utoipa::path(
    delete,
    path = "/{treatment_id}",
    tag = "treatment",
    summary = "Delete treatment",
    description = "Deletes a treatment, removes it from the symptom index and best-effort-deletes its image.",
    params(
        ("treatment_id" = String, Path, description = "Treatment id"),
    ),
    responses(
        (status = 204, description = "Treatment deleted"),
        (status = 404, description = "Treatment not found")
    ),
)]
pub async fn delete_treatment(
    Path(treatment_id): Path<String>,
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_treatment(treatment_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
