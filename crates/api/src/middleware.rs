//! Bearer-token middleware for the protected routes.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use rescue_auth::JwtValidator;

use crate::context::PrincipalContext;

#[derive(Clone)]
pub struct AuthState {
    pub jwt: Arc<dyn JwtValidator>,
}

/// Validates the `Authorization: Bearer` token and stashes the resulting
/// [`PrincipalContext`] in the request extensions.
///
/// Any failure short-circuits to 401 before a handler runs; handlers can
/// therefore assume the context is present.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = bearer_token(req.headers()).ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = state.jwt.validate(token, Utc::now()).map_err(|err| {
        tracing::debug!(error = %err, "rejected bearer token");
        StatusCode::UNAUTHORIZED
    })?;

    req.extensions_mut()
        .insert(PrincipalContext::new(claims.sub, claims.authorities));

    Ok(next.run(req).await)
}

/// The raw token from a well-formed `Authorization: Bearer <token>` header,
/// or `None` for anything else.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let token = headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
