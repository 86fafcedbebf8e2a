use super::handlers::create_treatment::{__path_create_treatment, create_treatment};
use super::handlers::delete_treatment::{__path_delete_treatment, delete_treatment};
use super::handlers::get_treatment::{__path_get_treatment, get_treatment};
use super::handlers::get_treatment_rating::{__path_get_treatment_rating, get_treatment_rating};
use super::handlers::get_treatments::{__path_get_treatments, get_treatments};
use super::handlers::update_treatment::{__path_update_treatment, update_treatment};
use super::handlers::upload_treatment_image::{
    __path_upload_treatment_image, upload_treatment_image,
};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_treatments,
    get_treatment,
    create_treatment,
    update_treatment,
    delete_treatment,
    get_treatment_rating,
    upload_treatment_image
))]
pub struct TreatmentApiDoc;

pub fn treatment_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/treatments"), get(get_treatments))
        .route(&format!("{root_path}/treatments"), post(create_treatment))
        .route(
            &format!("{root_path}/treatments/{{treatment_id}}"),
            get(get_treatment),
        )
        .route(
            &format!("{root_path}/treatments/{{treatment_id}}"),
            put(update_treatment),
        )
        .route(
            &format!("{root_path}/treatments/{{treatment_id}}"),
            delete(delete_treatment),
        )
        .route(
            &format!("{root_path}/treatments/{{treatment_id}}/rating"),
            get(get_treatment_rating),
        )
        .route(
            &format!("{root_path}/treatments/{{treatment_id}}/image"),
            post(upload_treatment_image),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
