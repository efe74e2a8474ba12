use chrono::NaiveDate;

use rescue_core::{AdoptionRequestId, AnimalId, DomainError, DomainResult};

use crate::request::AdoptionRequest;

/// A rescue animal listed for adoption, together with the open adoption
/// requests made against it.
///
/// Requests are kept in submission order. Edits happen in place and never
/// reorder the list; removals close the gap without renumbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    id: AnimalId,
    name: String,
    avatar_url: String,
    description: String,
    rescue_date: NaiveDate,
    adoption_requests: Vec<AdoptionRequest>,
}

impl Animal {
    /// Builds an animal with no adoption requests yet.
    pub fn new(
        id: AnimalId,
        name: impl Into<String>,
        avatar_url: impl Into<String>,
        description: impl Into<String>,
        rescue_date: NaiveDate,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            avatar_url: avatar_url.into(),
            description: description.into(),
            rescue_date,
            adoption_requests: Vec::new(),
        })
    }

    pub fn id(&self) -> AnimalId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn rescue_date(&self) -> NaiveDate {
        self.rescue_date
    }

    /// Open requests in submission order.
    pub fn adoption_requests(&self) -> &[AdoptionRequest] {
        &self.adoption_requests
    }

    pub fn find_request(&self, request_id: AdoptionRequestId) -> Option<&AdoptionRequest> {
        self.adoption_requests.iter().find(|r| r.id() == request_id)
    }

    /// Appends a request at the end of the list.
    ///
    /// The request must target this animal and carry an id not already in
    /// the list.
    pub fn append_request(&mut self, request: AdoptionRequest) -> DomainResult<()> {
        if request.animal_id() != self.id {
            return Err(DomainError::invariant("request targets another animal"));
        }
        if self.find_request(request.id()).is_some() {
            return Err(DomainError::invariant("duplicate adoption request id"));
        }

        self.adoption_requests.push(request);
        Ok(())
    }

    /// Edits a request in place; its position in the list is preserved.
    pub fn update_request(
        &mut self,
        request_id: AdoptionRequestId,
        email: impl Into<String>,
        notes: impl Into<String>,
    ) -> DomainResult<&AdoptionRequest> {
        let request = self
            .adoption_requests
            .iter_mut()
            .find(|r| r.id() == request_id)
            .ok_or_else(DomainError::not_found)?;

        request.update_details(email, notes)?;
        Ok(&*request)
    }

    /// Removes a request, returning the removed record.
    pub fn remove_request(&mut self, request_id: AdoptionRequestId) -> DomainResult<AdoptionRequest> {
        let index = self
            .adoption_requests
            .iter()
            .position(|r| r.id() == request_id)
            .ok_or_else(DomainError::not_found)?;

        Ok(self.adoption_requests.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 3, 14).unwrap()
    }

    fn test_animal() -> Animal {
        Animal::new(
            AnimalId::new(1),
            "Chocobo",
            "https://rescue.example.com/avatars/chocobo.png",
            "Fast, friendly, permanently hungry.",
            test_date(),
        )
        .unwrap()
    }

    fn test_request(id: i64) -> AdoptionRequest {
        AdoptionRequest::new(
            AdoptionRequestId::new(id),
            AnimalId::new(1),
            format!("adopter-{id}"),
            format!("adopter-{id}@example.com"),
            "please",
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_blank_name() {
        let err = Animal::new(
            AnimalId::new(1),
            "   ",
            "https://rescue.example.com/avatars/unknown.png",
            "",
            test_date(),
        )
        .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn append_keeps_submission_order() {
        let mut animal = test_animal();
        for id in [4, 2, 9] {
            animal.append_request(test_request(id)).unwrap();
        }

        let ids: Vec<i64> = animal
            .adoption_requests()
            .iter()
            .map(|r| r.id().as_i64())
            .collect();
        assert_eq!(ids, vec![4, 2, 9]);
    }

    #[test]
    fn append_rejects_request_for_another_animal() {
        let mut animal = test_animal();
        let foreign = AdoptionRequest::new(
            AdoptionRequestId::new(1),
            AnimalId::new(2),
            "sam",
            "sam@example.com",
            "",
        )
        .unwrap();

        let err = animal.append_request(foreign).unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            other => panic!("expected InvariantViolation error, got {other:?}"),
        }
        assert!(animal.adoption_requests().is_empty());
    }

    #[test]
    fn append_rejects_duplicate_request_id() {
        let mut animal = test_animal();
        animal.append_request(test_request(5)).unwrap();

        let err = animal.append_request(test_request(5)).unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            other => panic!("expected InvariantViolation error, got {other:?}"),
        }
        assert_eq!(animal.adoption_requests().len(), 1);
    }

    #[test]
    fn update_request_edits_in_place() {
        let mut animal = test_animal();
        for id in [1, 2, 3] {
            animal.append_request(test_request(id)).unwrap();
        }

        let updated = animal
            .update_request(AdoptionRequestId::new(2), "new@example.com", "updated")
            .unwrap();
        assert_eq!(updated.email(), "new@example.com");
        assert_eq!(updated.notes(), "updated");
        assert_eq!(updated.adopter_name(), "adopter-2");

        // Same position, same neighbours.
        let ids: Vec<i64> = animal
            .adoption_requests()
            .iter()
            .map(|r| r.id().as_i64())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn update_request_unknown_id_is_not_found() {
        let mut animal = test_animal();
        let err = animal
            .update_request(AdoptionRequestId::new(42), "a@example.com", "")
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn remove_request_returns_removed_record() {
        let mut animal = test_animal();
        for id in [1, 2, 3] {
            animal.append_request(test_request(id)).unwrap();
        }

        let removed = animal.remove_request(AdoptionRequestId::new(2)).unwrap();
        assert_eq!(removed.id(), AdoptionRequestId::new(2));

        let ids: Vec<i64> = animal
            .adoption_requests()
            .iter()
            .map(|r| r.id().as_i64())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_request_unknown_id_is_not_found() {
        let mut animal = test_animal();
        let err = animal
            .remove_request(AdoptionRequestId::new(42))
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: For any sequence of distinct request ids, appending them
        /// one by one stores them in exactly that order.
        #[test]
        fn append_preserves_submission_order(
            ids in prop::collection::vec(1i64..10_000i64, 1..32)
        ) {
            let mut seen = std::collections::HashSet::new();
            let ids: Vec<i64> = ids.into_iter().filter(|id| seen.insert(*id)).collect();

            let mut animal = test_animal();
            for id in &ids {
                animal.append_request(test_request(*id)).unwrap();
            }

            let stored: Vec<i64> = animal
                .adoption_requests()
                .iter()
                .map(|r| r.id().as_i64())
                .collect();
            prop_assert_eq!(stored, ids);
        }
    }
}
