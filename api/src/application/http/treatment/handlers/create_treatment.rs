use crate::application::auth::RequiredSession;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::treatment::validators::CreateTreatmentValidator;
use axum::extract::State;
use herbful_core::domain::treatment::entities::Treatment;
use herbful_core::domain::treatment::ports::TreatmentService;
use herbful_core::domain::treatment::value_objects::CreateTreatmentInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateTreatmentResponse {
    pub data: Treatment,
}

#[utoipa::path(
    post,
    path = "",
    tag = "treatment",
    summary = "Create treatment",
    description = "Creates a treatment; the id is derived from the name and collisions are rejected.",
    request_body = CreateTreatmentValidator,
    responses(
        (status = 201, body = CreateTreatmentResponse),
        (status = 409, description = "A treatment with the same derived id already exists"),
        (status = 422, description = "Validation failed")
    ),
)]
pub async fn create_treatment(
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
    ValidateJson(payload): ValidateJson<CreateTreatmentValidator>,
) -> Result<Response<CreateTreatmentResponse>, ApiError> {
    let treatment = state
        .service
        .create_treatment(CreateTreatmentInput {
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
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateTreatmentResponse {
        data: treatment,
    }))
}
