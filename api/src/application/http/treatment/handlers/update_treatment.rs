use crate::application::auth::RequiredSession;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::treatment::validators::UpdateTreatmentValidator;
use axum::extract::{Path, State};
use herbful_core::domain::treatment::entities::Treatment;
use herbful_core::domain::treatment::ports::TreatmentService;
use herbful_core::domain::treatment::value_objects::UpdateTreatmentInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateTreatmentResponse {
    pub data: Treatment,
}

#[utoipa::path(
    put,
    path = "/{treatment_id}",
    tag = "treatment",
    summary = "Update treatment",
    params(
        ("treatment_id" = String, Path, description = "Treatment id"),
    ),
    request_body = UpdateTreatmentValidator,
    responses(
        (status = 200, body = UpdateTreatmentResponse),
        (status = 404, description = "Treatment not found"),
        (status = 422, description = "Validation failed")
    ),
)]
pub async fn update_treatment(
    Path(treatment_id): Path<String>,
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
    ValidateJson(payload): ValidateJson<UpdateTreatmentValidator>,
) -> Result<Response<UpdateTreatmentResponse>, ApiError> {
    let treatment = state
        .service
        .update_treatment(
            treatment_id,
            UpdateTreatmentInput {
                name: payload.name,
                source_type: payload.source_type,
                sources: payload.sources,
                preparation: payload.preparation,
                usage: payload.usage,
                dosage: payload.dosage,
                warnings: payload.warnings,
                benefits: payload.benefits,
                symptoms: payload.symptoms,
                image_url: payload.image_url,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateTreatmentResponse { data: treatment }))
}
