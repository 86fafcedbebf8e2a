use crate::application::auth::RequiredSession;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use herbful_core::domain::review::entities::Review;
use herbful_core::domain::review::ports::ReviewService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetReviewResponse {
    pub data: Review,
}

#[utoipa::path(
    get,
    path = "/{review_id}",
    tag = "review",
    summary = "Get review",
    params(
        ("review_id" = String, Path, description = "Review id"),
    ),
    responses(
        (status = 200, body = GetReviewResponse),
        (status = 404, description = "Review not found")
    ),
)]
pub async fn get_review(
    Path(review_id): Path<String>,
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
) -> Result<Response<GetReviewResponse>, ApiError> {
    let review = state
        .service
        .get_review(review_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetReviewResponse { data: review }))
}
