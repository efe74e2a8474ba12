use std::sync::Arc;

use rescue_animals::{AdoptionRequest, Animal};
use rescue_core::{AdoptionRequestId, AnimalId};
use rescue_infra::{seed, AdoptionRequestStore, AnimalStore, InMemoryRescueStore, StoreError};

/// Shared handles the HTTP handlers work through.
///
/// Storage is reached only via the store traits, so swapping the in-memory
/// backend for a persistent one stays a wiring change in `build_services`.
#[derive(Clone)]
pub struct AppServices {
    animals: Arc<dyn AnimalStore>,
    requests: Arc<dyn AdoptionRequestStore>,
}

/// Builds the production wiring: one seeded in-memory store serving both
/// store traits.
pub fn build_services() -> AppServices {
    let store = Arc::new(InMemoryRescueStore::new());
    seed::seed_rescue_data(&store).expect("failed to seed demo catalogue");

    AppServices {
        animals: store.clone(),
        requests: store,
    }
}

impl AppServices {
    pub fn animals_list(&self) -> Vec<Animal> {
        self.animals.list_all()
    }

    pub fn animals_get(&self, animal_id: AnimalId) -> Option<Animal> {
        self.animals.get_by_id(animal_id)
    }

    pub fn adoption_requests_get(
        &self,
        request_id: AdoptionRequestId,
    ) -> Option<AdoptionRequest> {
        self.requests.find_request(request_id)
    }

    pub fn adoption_requests_create(
        &self,
        animal_id: AnimalId,
        adopter_name: String,
        email: String,
        notes: String,
    ) -> Result<AdoptionRequest, StoreError> {
        self.requests.create(animal_id, adopter_name, email, notes)
    }

    pub fn adoption_requests_update(
        &self,
        request_id: AdoptionRequestId,
        email: String,
        notes: String,
    ) -> Result<AdoptionRequest, StoreError> {
        self.requests.update(request_id, email, notes)
    }

    pub fn adoption_requests_delete(
        &self,
        request_id: AdoptionRequestId,
    ) -> Result<AdoptionRequest, StoreError> {
        self.requests.delete(request_id)
    }
}
