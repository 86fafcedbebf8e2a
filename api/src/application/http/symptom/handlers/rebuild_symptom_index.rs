use crate::application::auth::RequiredSession;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use herbful_core::domain::symptom::ports::SymptomService;

#[utoipa::path(
    post,
    path = "/rebuild",
    tag = "symptom",
    summary = "Rebuild symptom index",
    description = "Repair tooling: derives the whole index from every treatment's symptom list, discarding the previous contents.",
    responses(
        (status = 204, description = "Index rebuilt")
    ),
)]
pub async fn rebuild_symptom_index(
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .rebuild_symptom_index()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
