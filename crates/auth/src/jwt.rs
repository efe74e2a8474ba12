//! Bearer token verification (HS256).
//!
//! The trait keeps the API middleware decoupled from the concrete signature
//! scheme; tests and deployments share the same seam.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::claims::{validate_claims, JwtClaims, TokenValidationError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JwtError {
    #[error("token is malformed or carries an invalid signature")]
    Invalid,

    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Decode + verify a bearer token into validated claims.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, JwtError>;
}

/// HS256 validator over a shared secret.
pub struct Hs256JwtValidator {
    decoding_key: jsonwebtoken::DecodingKey,
    validation: jsonwebtoken::Validation,
}

impl Hs256JwtValidator {
    pub fn new(secret: Vec<u8>) -> Self {
        let decoding_key = jsonwebtoken::DecodingKey::from_secret(&secret);

        let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
        // Time windows live in `issued_at`/`expires_at` and are checked by
        // `validate_claims`; the registered `exp`/`nbf` claims are not used.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            decoding_key,
            validation,
        }
    }
}

impl JwtValidator for Hs256JwtValidator {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, JwtError> {
        let data = jsonwebtoken::decode::<JwtClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| JwtError::Invalid)?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}
