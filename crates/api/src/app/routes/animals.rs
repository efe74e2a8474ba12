use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::dto;
use crate::app::services::AppServices;

/// `GET /animals` — the whole catalogue as a JSON array, nested adoption
/// requests included.
///
/// Public: browsing the catalogue requires no token.
pub async fn list_animals(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let animals = services
        .animals_list()
        .iter()
        .map(dto::animal_to_json)
        .collect::<Vec<_>>();

    (StatusCode::OK, Json(animals)).into_response()
}
