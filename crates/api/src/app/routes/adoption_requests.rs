use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{post, put},
    Json, Router,
};

use rescue_animals::AdoptionRequest;
use rescue_auth::authorize_mutation;
use rescue_core::{AdoptionRequestId, AnimalId};
use rescue_infra::StoreError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route(
            "/animals/:animal_id/adoption-requests",
            post(submit_adoption_request),
        )
        .route(
            "/animals/:animal_id/adoption-requests/:request_id",
            put(edit_adoption_request).delete(delete_adoption_request),
        )
}

/// `POST /animals/:animal_id/adoption-requests`
///
/// The adopter name is the authenticated principal; the body only carries
/// the contact email and free-form notes.
pub async fn submit_adoption_request(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(animal_id): Path<String>,
    Json(body): Json<dto::AdoptionRequestBody>,
) -> axum::response::Response {
    let animal_id = match parse_animal_id(&animal_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let principal = match authz::authorize_adoption_mutation(&principal) {
        Ok(p) => p,
        Err(e) => return errors::forbidden(e),
    };

    let created = match services.adoption_requests_create(
        animal_id,
        principal.name.to_string(),
        body.email,
        body.notes,
    ) {
        Ok(r) => r,
        Err(e) => return errors::store_error_to_response(e),
    };

    (
        StatusCode::CREATED,
        Json(dto::adoption_request_to_json(&created)),
    )
        .into_response()
}

/// `PUT /animals/:animal_id/adoption-requests/:request_id`
///
/// Only the original requester may edit, and only email/notes change.
pub async fn edit_adoption_request(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path((animal_id, request_id)): Path<(String, String)>,
    Json(body): Json<dto::AdoptionRequestBody>,
) -> axum::response::Response {
    let (animal_id, request_id) = match parse_ids(&animal_id, &request_id) {
        Ok(ids) => ids,
        Err(resp) => return resp,
    };

    let principal = match authz::authorize_adoption_mutation(&principal) {
        Ok(p) => p,
        Err(e) => return errors::forbidden(e),
    };

    let existing = match lookup_request(&services, animal_id, request_id) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    if let Err(e) = authorize_mutation(&principal, existing.adopter_name()) {
        return errors::forbidden(e);
    }

    let updated = match services.adoption_requests_update(request_id, body.email, body.notes) {
        Ok(r) => r,
        Err(e) => return errors::store_error_to_response(e),
    };

    (
        StatusCode::OK,
        Json(dto::adoption_request_to_json(&updated)),
    )
        .into_response()
}

/// `DELETE /animals/:animal_id/adoption-requests/:request_id`
///
/// Only the original requester may withdraw their request.
pub async fn delete_adoption_request(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path((animal_id, request_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (animal_id, request_id) = match parse_ids(&animal_id, &request_id) {
        Ok(ids) => ids,
        Err(resp) => return resp,
    };

    let principal = match authz::authorize_adoption_mutation(&principal) {
        Ok(p) => p,
        Err(e) => return errors::forbidden(e),
    };

    let existing = match lookup_request(&services, animal_id, request_id) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    if let Err(e) = authorize_mutation(&principal, existing.adopter_name()) {
        return errors::forbidden(e);
    }

    let removed = match services.adoption_requests_delete(request_id) {
        Ok(r) => r,
        Err(e) => return errors::store_error_to_response(e),
    };

    (
        StatusCode::OK,
        Json(dto::adoption_request_to_json(&removed)),
    )
        .into_response()
}

/// Fetch the request for an ownership check, requiring it to live under the
/// animal named in the path.
fn lookup_request(
    services: &AppServices,
    animal_id: AnimalId,
    request_id: AdoptionRequestId,
) -> Result<AdoptionRequest, axum::response::Response> {
    let Some(request) = services.adoption_requests_get(request_id) else {
        return Err(errors::store_error_to_response(StoreError::NotFound));
    };
    if request.animal_id() != animal_id {
        return Err(errors::store_error_to_response(StoreError::NotFound));
    }
    Ok(request)
}

fn parse_animal_id(raw: &str) -> Result<AnimalId, axum::response::Response> {
    raw.parse::<AnimalId>().map_err(errors::domain_error_to_response)
}

fn parse_ids(
    animal_id: &str,
    request_id: &str,
) -> Result<(AnimalId, AdoptionRequestId), axum::response::Response> {
    let animal_id = parse_animal_id(animal_id)?;
    let request_id = request_id
        .parse::<AdoptionRequestId>()
        .map_err(errors::domain_error_to_response)?;
    Ok((animal_id, request_id))
}
