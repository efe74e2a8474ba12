use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use rescue_animals::{Animal, AdoptionRequest};
use rescue_core::{AdoptionRequestId, AnimalId};

use super::{AdoptionRequestStore, AnimalStore, StoreError};

/// Mutable state guarded by the store lock.
#[derive(Debug)]
struct RescueState {
    /// Animals keyed by id; the `BTreeMap` keeps listings in ascending
    /// id order.
    animals: BTreeMap<AnimalId, Animal>,
    /// Owning animal for every live request id.
    request_index: HashMap<AdoptionRequestId, AnimalId>,
    /// Next id handed out by `create`.
    next_request_id: i64,
}

/// In-memory store holding the whole catalogue behind a single `RwLock`.
///
/// Writers take the lock exclusively, so id allocation, the append to the
/// owning animal and the index update always land together.
#[derive(Debug)]
pub struct InMemoryRescueStore {
    inner: RwLock<RescueState>,
}

impl InMemoryRescueStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RescueState {
                animals: BTreeMap::new(),
                request_index: HashMap::new(),
                next_request_id: 1,
            }),
        }
    }

    /// Inserts a fully formed animal, registering any requests it already
    /// carries and advancing the id sequence past them.
    ///
    /// Used for seeding and test fixtures.
    pub fn insert_animal(&self, animal: Animal) -> Result<(), StoreError> {
        let mut state = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        if state.animals.contains_key(&animal.id()) {
            return Err(StoreError::Conflict(format!(
                "animal {} already exists",
                animal.id()
            )));
        }
        // Carried ids must not collide with requests indexed under another
        // animal; checked up front so a rejected insert mutates nothing.
        for request in animal.adoption_requests() {
            if state.request_index.contains_key(&request.id()) {
                return Err(StoreError::Conflict(format!(
                    "adoption request {} already exists",
                    request.id()
                )));
            }
        }

        for request in animal.adoption_requests() {
            state.request_index.insert(request.id(), animal.id());
            if request.id().as_i64() >= state.next_request_id {
                state.next_request_id = request.id().as_i64() + 1;
            }
        }

        state.animals.insert(animal.id(), animal);
        Ok(())
    }
}

impl Default for InMemoryRescueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimalStore for InMemoryRescueStore {
    fn list_all(&self) -> Vec<Animal> {
        let state = match self.inner.read() {
            Ok(s) => s,
            Err(_) => return vec![],
        };

        state.animals.values().cloned().collect()
    }

    fn get_by_id(&self, animal_id: AnimalId) -> Option<Animal> {
        let state = self.inner.read().ok()?;
        state.animals.get(&animal_id).cloned()
    }
}

impl AdoptionRequestStore for InMemoryRescueStore {
    fn create(
        &self,
        animal_id: AnimalId,
        adopter_name: String,
        email: String,
        notes: String,
    ) -> Result<AdoptionRequest, StoreError> {
        let mut state = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        if !state.animals.contains_key(&animal_id) {
            return Err(StoreError::NotFound);
        }

        // Validate before touching any state so a rejected request burns
        // neither an id nor an index slot.
        let request_id = AdoptionRequestId::new(state.next_request_id);
        let request = AdoptionRequest::new(request_id, animal_id, adopter_name, email, notes)?;

        let Some(animal) = state.animals.get_mut(&animal_id) else {
            return Err(StoreError::NotFound);
        };
        animal.append_request(request.clone())?;

        state.next_request_id += 1;
        state.request_index.insert(request_id, animal_id);
        Ok(request)
    }

    fn update(
        &self,
        request_id: AdoptionRequestId,
        email: String,
        notes: String,
    ) -> Result<AdoptionRequest, StoreError> {
        let mut state = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        let animal_id = *state
            .request_index
            .get(&request_id)
            .ok_or(StoreError::NotFound)?;
        let Some(animal) = state.animals.get_mut(&animal_id) else {
            return Err(StoreError::NotFound);
        };

        let updated = animal.update_request(request_id, email, notes)?;
        Ok(updated.clone())
    }

    fn delete(&self, request_id: AdoptionRequestId) -> Result<AdoptionRequest, StoreError> {
        let mut state = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        let animal_id = *state
            .request_index
            .get(&request_id)
            .ok_or(StoreError::NotFound)?;
        let Some(animal) = state.animals.get_mut(&animal_id) else {
            return Err(StoreError::NotFound);
        };

        let removed = animal.remove_request(request_id)?;
        state.request_index.remove(&request_id);
        Ok(removed)
    }

    fn find_request(&self, request_id: AdoptionRequestId) -> Option<AdoptionRequest> {
        let state = self.inner.read().ok()?;
        let animal_id = state.request_index.get(&request_id)?;
        state
            .animals
            .get(animal_id)?
            .find_request(request_id)
            .cloned()
    }
}
