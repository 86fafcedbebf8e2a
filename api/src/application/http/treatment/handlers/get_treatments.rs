use crate::application::auth::RequiredSession;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use herbful_core::domain::treatment::entities::Treatment;
use herbful_core::domain::treatment::ports::TreatmentService;
use herbful_core::domain::treatment::value_objects::{
    GetTreatmentsFilter, SortOrder, TreatmentSortBy,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetTreatmentsQuery {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub search: Option<String>,
    pub sort_by: Option<TreatmentSortBy>,
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTreatmentsResponse {
    pub data: Vec<Treatment>,
    pub total_count: usize,
    pub total_pages: usize,
}

#[utoipa::path(
    get,
    path = "",
    tag = "treatment",
    summary = "List treatments",
    description = "Lists treatments with search, sort and pagination applied over the full catalog.",
    params(GetTreatmentsQuery),
    responses(
        (status = 200, body = GetTreatmentsResponse)
    ),
)]
pub async fn get_treatments(
    Query(query): Query<GetTreatmentsQuery>,
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
) -> Result<Response<GetTreatmentsResponse>, ApiError> {
    let page = state
        .service
        .list_treatments(GetTreatmentsFilter {
            page: query.page.unwrap_or(1),
            page_size: query.page_size.unwrap_or(20),
            search: query.search,
            sort_by: query.sort_by,
            sort_order: query.sort_order,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetTreatmentsResponse {
        data: page.items,
        total_count: page.total_count,
        total_pages: page.total_pages,
    }))
}
