//! `rescue-auth` — who is calling, and what may they do.
//!
//! Knows nothing about HTTP or storage. Token *issuance* is external; this
//! crate only verifies and interprets what an identity provider handed the
//! caller: signature + time window first, then the capability and ownership
//! rules.

pub mod authority;
pub mod authorize;
pub mod claims;
pub mod jwt;
pub mod principal;

pub use authority::Authority;
pub use authorize::{authorize, authorize_mutation, can_mutate, AuthzError, Principal};
pub use claims::{validate_claims, JwtClaims, TokenValidationError};
pub use jwt::{Hs256JwtValidator, JwtError, JwtValidator};
pub use principal::PrincipalName;
