use super::handlers::get_symptoms::{__path_get_symptoms, get_symptoms};
use super::handlers::rebuild_symptom_index::{
    __path_rebuild_symptom_index, rebuild_symptom_index,
};
use super::handlers::rename_symptom::{__path_rename_symptom, rename_symptom};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_symptoms, rebuild_symptom_index, rename_symptom))]
pub struct SymptomApiDoc;

pub fn symptom_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/symptoms"), get(get_symptoms))
        .route(
            &format!("{root_path}/symptoms/rebuild"),
            post(rebuild_symptom_index),
        )
        .route(
            &format!("{root_path}/symptoms/rename"),
            post(rename_symptom),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
