use super::handlers::get_me::{__path_get_me, get_me};
use super::handlers::login::{__path_login, login};
use super::handlers::logout::{__path_logout, logout};
use super::handlers::update_email::{__path_update_email, update_email};
use super::handlers::update_password::{__path_update_password, update_password};
use super::handlers::update_username::{__path_update_username, update_username};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(login, logout, get_me, update_username, update_email, update_password))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/auth/login"), post(login))
        .route(&format!("{root_path}/auth/logout"), post(logout))
        .route(&format!("{root_path}/auth/me"), get(get_me))
        .route(
            &format!("{root_path}/auth/username"),
            put(update_username),
        )
        .route(&format!("{root_path}/auth/email"), put(update_email))
        .route(
            &format!("{root_path}/auth/password"),
            put(update_password),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
