//! Storage abstraction for the adoption catalogue.

use thiserror::Error;

use rescue_animals::{Animal, AdoptionRequest};
use rescue_core::{AdoptionRequestId, AnimalId, DomainError};

mod memory;

pub use memory::InMemoryRescueStore;

/// Errors surfaced by store implementations.
///
/// `NotFound` is the lookup miss for both animals and adoption requests;
/// domain-level `NotFound` results are normalised into it so callers only
/// have one miss variant to match on.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found")]
    NotFound,

    #[error("store lock poisoned")]
    LockPoisoned,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Domain(DomainError),
}

impl From<DomainError> for StoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound => StoreError::NotFound,
            other => StoreError::Domain(other),
        }
    }
}

/// Read access to the adoptable-animal catalogue.
pub trait AnimalStore: Send + Sync {
    /// Every animal, in ascending id order, each carrying its requests in
    /// submission order.
    fn list_all(&self) -> Vec<Animal>;

    fn get_by_id(&self, animal_id: AnimalId) -> Option<Animal>;
}

/// Create/update/delete access to adoption requests.
///
/// Request ids are allocated by the store from a single monotonic sequence;
/// ids of deleted requests are never reused.
pub trait AdoptionRequestStore: Send + Sync {
    /// Appends a new request for `animal_id`, returning the stored record
    /// with its freshly assigned id.
    fn create(
        &self,
        animal_id: AnimalId,
        adopter_name: String,
        email: String,
        notes: String,
    ) -> Result<AdoptionRequest, StoreError>;

    /// Overwrites the editable fields of an existing request in place.
    fn update(
        &self,
        request_id: AdoptionRequestId,
        email: String,
        notes: String,
    ) -> Result<AdoptionRequest, StoreError>;

    /// Removes a request, returning the removed record.
    fn delete(&self, request_id: AdoptionRequestId) -> Result<AdoptionRequest, StoreError>;

    fn find_request(&self, request_id: AdoptionRequestId) -> Option<AdoptionRequest>;
}
