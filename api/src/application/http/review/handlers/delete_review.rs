use crate::application::auth::RequiredSession;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use herbful_core::domain::review::ports::ReviewService;

#[utoipa::path(
    delete,
    path = "/{review_id}",
    tag = "review",
    summary = "Delete review",
    description = "Deletes a review and recomputes the treatment's cached rating.",
    params(
        ("review_id" = String, Path, description = "Review id"),
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "Review not found")
    ),
)]
pub async fn delete_review(
    Path(review_id): Path<String>,
    State(state): State<AppState>,
    RequiredSession(_user): RequiredSession,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_review(review_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
