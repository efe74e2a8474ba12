//! API-side authorization guards.
//!
//! Authorization is enforced at the handler boundary, before any store
//! write; the domain and store layers stay auth-agnostic.

use rescue_auth::{authorize, Authority, AuthzError, Principal};

use crate::context::PrincipalContext;

/// Authority required for every adoption-request mutation.
pub const ADOPTION_REQUEST_AUTHORITY: &str = "adoption.request";

/// Rebuild the auth-layer principal from the request context.
pub fn principal_from_context(ctx: &PrincipalContext) -> Principal {
    Principal {
        name: ctx.name().clone(),
        authorities: ctx.authorities().to_vec(),
    }
}

/// Capability gate for adoption-request mutations.
///
/// Returns the reconstructed principal so callers can follow up with the
/// ownership check without rebuilding it.
pub fn authorize_adoption_mutation(ctx: &PrincipalContext) -> Result<Principal, AuthzError> {
    let principal = principal_from_context(ctx);
    authorize(&principal, &Authority::new(ADOPTION_REQUEST_AUTHORITY))?;
    Ok(principal)
}
