use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::context::PrincipalContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// `GET /whoami` — echoes the authenticated principal, mostly useful for
/// debugging token wiring.
pub async fn whoami(Extension(principal): Extension<PrincipalContext>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": principal.name().as_str(),
        "authorities": principal
            .authorities()
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>(),
    }))
}
