use crate::application::auth::RequiredSession;
use crate::application::http::review::validators::CreateReviewValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use herbful_core::domain::review::entities::Review;
use herbful_core::domain::review::ports::ReviewService;
use herbful_core::domain::review::value_objects::CreateReviewInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateReviewResponse {
    pub data: Review,
}

#[utoipa::path(
    post,
    path = "",
    tag = "review",
    summary = "Create review",
    description = "Creates a review against an existing treatment and recomputes the treatment's cached rating.",
    request_body = CreateReviewValidator,
    responses(
        (status = 201, body = CreateReviewResponse),
        (status = 404, description = "Treatment not found"),
        (status = 422, description = "Validation failed")
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
    ValidateJson(payload): ValidateJson<CreateReviewValidator>,
) -> Result<Response<CreateReviewResponse>, ApiError> {
    let review = state
        .service
        .create_review(CreateReviewInput {
            treatment_id: payload.treatment_id,
            rating: payload.rating,
            comment: payload.comment,
            user_name: payload.user_name,
            user_email: payload.user_email,
            anonymous: payload.anonymous,
            admin_notes: payload.admin_notes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateReviewResponse { data: review }))
}
