use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use herbful_core::domain::authentication::ports::AuthService;

#[utoipa::path(
    post,
    path = "/logout",
    tag = "authentication",
    summary = "Log out",
    description = "Clears the bearer session.",
    responses(
        (status = 204, description = "Session cleared")
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .logout(bearer.token().to_string())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
