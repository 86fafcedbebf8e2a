use crate::application::auth::RequiredSession;
use crate::application::http::review::validators::UpdateReviewValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use herbful_core::domain::review::entities::Review;
use herbful_core::domain::review::ports::ReviewService;
use herbful_core::domain::review::value_objects::UpdateReviewInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateReviewResponse {
    pub data: Review,
}

#[utoipa::path(
    put,
    path = "/{review_id}",
    tag = "review",
    summary = "Update review",
    description = "Partially updates a review; the treatment's cached rating is recomputed when the rating changed.",
    params(
        ("review_id" = String, Path, description = "Review id"),
    ),
    request_body = UpdateReviewValidator,
    responses(
        (status = 200, body = UpdateReviewResponse),
        (status = 404, description = "Review not found"),
        (status = 422, description = "Validation failed")
    ),
)]
pub async fn update_review(
    Path(review_id): Path<String>,
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
    ValidateJson(payload): ValidateJson<UpdateReviewValidator>,
) -> Result<Response<UpdateReviewResponse>, ApiError> {
    let review = state
        .service
        .update_review(
            review_id,
            UpdateReviewInput {
                rating: payload.rating,
                comment: payload.comment,
                user_name: payload.user_name,
                user_email: payload.user_email,
                anonymous: payload.anonymous,
                admin_notes: payload.admin_notes,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateReviewResponse { data: review }))
}
