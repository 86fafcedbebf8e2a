use crate::application::auth::RequiredSession;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use herbful_core::domain::treatment::ports::TreatmentService;
use herbful_core::domain::treatment::value_objects::RatingSummary;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTreatmentRatingResponse {
    pub data: RatingSummary,
}

#[utoipa::path(
    get,
    path = "/{treatment_id}/rating",
    tag = "treatment",
    summary = "Get treatment rating",
    description = "Live review aggregate, matching reviews by id or by denormalized treatment name.",
    params(
        ("treatment_id" = String, Path, description = "Treatment id"),
    ),
    responses(
        (status = 200, body = GetTreatmentRatingResponse),
        (status = 404, description = "Treatment not found")
    ),
)]
pub async fn get_treatment_rating(
    Path(treatment_id): Path<String>,
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
) -> Result<Response<GetTreatmentRatingResponse>, ApiError> {
    let summary = state
        .service
        .treatment_rating(treatment_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetTreatmentRatingResponse { data: summary }))
}
