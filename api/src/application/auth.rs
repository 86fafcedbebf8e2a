use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use herbful_core::domain::authentication::{entities::SessionUser, ports::AuthService};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Bearer-session middleware. A valid session puts the [`SessionUser`] into the
/// request extensions; requests without one pass through and are rejected by
/// [`RequiredSession`] on the routes that need it. Reading an expired session
/// drops it server-side.
pub async fn auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    if let Some(auth_header) = req.headers().get("authorization")
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
        && !token.is_empty()
    {
        match state.service.authenticate(token.to_string()).await {
            Ok(user) => {
                req.extensions_mut().insert(user);
            }
            Err(err) => debug!(%err, "bearer token did not resolve to a session"),
        }
    }

    next.run(req).await
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, ApiError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError::Unauthorized("authentication required".to_string()))?;

    Ok(bearer.token().to_string())
}

/// Extractor enforcing an authenticated admin session.
pub struct RequiredSession(pub SessionUser);

impl<S> FromRequestParts<S> for RequiredSession
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionUser>()
            .cloned()
            .map(RequiredSession)
            .ok_or_else(|| ApiError::Unauthorized("authentication required".to_string()))
    }
}
