use axum::{Router, extract::State, routing::get};
use herbful_core::domain::health::{entities::StoreHealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health"), get(health))
}

async fn health(State(state): State<AppState>) -> Result<Response<StoreHealthStatus>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;
    Ok(Response::OK(status))
}
