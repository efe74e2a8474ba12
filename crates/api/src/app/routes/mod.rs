use axum::{routing::get, Router};

pub mod adoption_requests;
pub mod animals;
pub mod system;

/// Router for all endpoints that require a bearer token.
pub fn protected_router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .merge(adoption_requests::router())
}
