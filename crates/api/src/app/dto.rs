use serde::Deserialize;

use rescue_animals::{AdoptionRequest, Animal};

// -------------------------
// Request DTOs
// -------------------------

/// Body for submitting or editing an adoption request.
///
/// The adopter name is never taken from the body; it always comes from the
/// authenticated principal.
#[derive(Debug, Deserialize)]
pub struct AdoptionRequestBody {
    pub email: String,
    #[serde(default)]
    pub notes: String,
}

// -------------------------
// Response mapping (camelCase keys, matching the web client)
// -------------------------

pub fn animal_to_json(animal: &Animal) -> serde_json::Value {
    serde_json::json!({
        "id": animal.id().as_i64(),
        "name": animal.name(),
        "avatarUrl": animal.avatar_url(),
        "description": animal.description(),
        "rescueDate": animal.rescue_date().to_string(),
        "adoptionRequests": animal
            .adoption_requests()
            .iter()
            .map(adoption_request_to_json)
            .collect::<Vec<_>>(),
    })
}

pub fn adoption_request_to_json(request: &AdoptionRequest) -> serde_json::Value {
    serde_json::json!({
        "id": request.id().as_i64(),
        "adopterName": request.adopter_name(),
        "email": request.email(),
        "notes": request.notes(),
    })
}
