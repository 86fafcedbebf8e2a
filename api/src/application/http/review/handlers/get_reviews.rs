use crate::application::auth::RequiredSession;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use herbful_core::domain::review::entities::Review;
use herbful_core::domain::review::ports::ReviewService;
use herbful_core::domain::review::value_objects::{GetReviewsFilter, ReviewStats};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetReviewsQuery {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub search: Option<String>,
    pub rating: Option<u8>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetReviewsResponse {
    pub data: Vec<Review>,
    pub total_count: usize,
    pub total_pages: usize,
    pub stats: ReviewStats,
}

#[utoipa::path(
    get,
    path = "",
    tag = "review",
    summary = "List reviews",
    description = "Lists reviews newest first, with search and exact rating filtering. Stats cover the whole collection.",
    params(GetReviewsQuery),
    responses(
        (status = 200, body = GetReviewsResponse)
    ),
)]
pub async fn get_reviews(
    Query(query): Query<GetReviewsQuery>,
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
) -> Result<Response<GetReviewsResponse>, ApiError> {
    let listing = state
        .service
        .list_reviews(GetReviewsFilter {
            page: query.page.unwrap_or(1),
            page_size: query.page_size.unwrap_or(20),
            search: query.search,
            rating: query.rating,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetReviewsResponse {
        data: listing.items,
        total_count: listing.total_count,
        total_pages: listing.total_pages,
        stats: listing.stats,
    }))
}
