//! Infrastructure layer: storage backends and startup seeding.
//!
//! Everything here is process-local. The HTTP layer sees storage only through
//! the `AnimalStore` and `AdoptionRequestStore` traits, so a database-backed
//! implementation can slot in later without touching the handlers.

pub mod seed;
pub mod store;

pub use store::{AdoptionRequestStore, AnimalStore, InMemoryRescueStore, StoreError};
