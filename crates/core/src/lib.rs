//! `rescue-core` — shared domain primitives.
//!
//! Identifier newtypes and the domain error model; everything here is plain
//! data with no IO behind it.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{AdoptionRequestId, AnimalId};
