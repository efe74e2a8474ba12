use rescue_core::{AdoptionRequestId, AnimalId, DomainError, DomainResult};

/// A request by a named adopter to adopt a specific animal.
///
/// The requester (`adopter_name`) and the target animal are fixed at
/// creation time and never change; only `email` and `notes` are editable.
/// Ownership checks elsewhere rely on `adopter_name` being immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdoptionRequest {
    id: AdoptionRequestId,
    animal_id: AnimalId,
    adopter_name: String,
    email: String,
    notes: String,
}

impl AdoptionRequest {
    /// Builds a request, validating the adopter name and contact email.
    ///
    /// The email is only required to be non-blank; no format check is
    /// applied beyond that.
    pub fn new(
        id: AdoptionRequestId,
        animal_id: AnimalId,
        adopter_name: impl Into<String>,
        email: impl Into<String>,
        notes: impl Into<String>,
    ) -> DomainResult<Self> {
        let adopter_name = adopter_name.into();
        if adopter_name.trim().is_empty() {
            return Err(DomainError::validation("adopter name cannot be empty"));
        }

        let email = email.into();
        if email.trim().is_empty() {
            return Err(DomainError::validation("email cannot be empty"));
        }

        Ok(Self {
            id,
            animal_id,
            adopter_name,
            email,
            notes: notes.into(),
        })
    }

    pub fn id(&self) -> AdoptionRequestId {
        self.id
    }

    pub fn animal_id(&self) -> AnimalId {
        self.animal_id
    }

    pub fn adopter_name(&self) -> &str {
        &self.adopter_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Replaces the editable fields; id, animal and adopter stay fixed.
    pub fn update_details(
        &mut self,
        email: impl Into<String>,
        notes: impl Into<String>,
    ) -> DomainResult<()> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(DomainError::validation("email cannot be empty"));
        }

        self.email = email;
        self.notes = notes.into();
        Ok(())
    }
}
