use crate::application::auth::RequiredSession;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use herbful_core::domain::treatment::entities::Treatment;
use herbful_core::domain::treatment::ports::TreatmentService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTreatmentResponse {
    pub data: Treatment,
}

#[utoipa::path(
    get,
    path = "/{treatment_id}",
    tag = "treatment",
    summary = "Get treatment",
    params(
        ("treatment_id" = String, Path, description = "Treatment id"),
    ),
    responses(
        (status = 200, body = GetTreatmentResponse),
        (status = 404, description = "Treatment not found")
    ),
)]
pub async fn get_treatment(
    Path(treatment_id): Path<String>,
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
) -> Result<Response<GetTreatmentResponse>, ApiError> {
    let treatment = state
        .service
        .get_treatment(treatment_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetTreatmentResponse { data: treatment }))
}
