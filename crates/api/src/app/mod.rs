//! Router assembly.
//!
//! `services.rs` wires the seeded store, `routes/` holds the handlers (one
//! file per area), `dto.rs` the wire shapes and `errors.rs` the JSON error
//! envelope. `build_app` glues them together.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Assemble the router `main.rs` (and the tests) serve.
///
/// The catalogue listing and the health endpoint are public; everything
/// else sits behind bearer auth.
pub fn build_app(jwt_secret: String) -> Router {
    let jwt = Arc::new(rescue_auth::Hs256JwtValidator::new(jwt_secret.into_bytes()));
    let auth_state = middleware::AuthState { jwt };

    let services = Arc::new(services::build_services());

    let protected = routes::protected_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/animals", get(routes::animals::list_animals))
        .merge(protected)
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
