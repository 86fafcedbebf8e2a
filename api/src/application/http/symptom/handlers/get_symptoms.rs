use crate::application::auth::RequiredSession;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use herbful_core::domain::symptom::ports::SymptomService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SymptomListItem {
    /// Sanitized index key.
    pub key: String,
    /// Display name, first-seen casing.
    pub name: String,
    pub treatment_ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSymptomsResponse {
    pub data: Vec<SymptomListItem>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "symptom",
    summary = "List symptoms",
    description = "Returns the symptom inverted index: each symptom with the treatments that list it.",
    responses(
        (status = 200, body = GetSymptomsResponse)
    ),
)]
pub async fn get_symptoms(
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
) -> Result<Response<GetSymptomsResponse>, ApiError> {
    let entries = state
        .service
        .list_symptoms()
        .await
        .map_err(ApiError::from)?;

    let data = entries
        .into_iter()
        .map(|(key, entry)| SymptomListItem {
            key,
            name: entry.name,
            treatment_ids: entry.treatment_ids,
        })
        .collect();

    Ok(Response::OK(GetSymptomsResponse { data }))
}
