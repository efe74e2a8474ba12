//! Demo catalogue loaded at startup.

use chrono::NaiveDate;

use rescue_animals::Animal;
use rescue_core::{AnimalId, DomainError};

use crate::store::{AdoptionRequestStore, InMemoryRescueStore, StoreError};

/// `(id, name, avatar_url, description, rescue_date)`
const ANIMALS: &[(i64, &str, &str, &str, &str)] = &[
    (
        1,
        "Chocobo",
        "https://rescue.example.com/avatars/chocobo.png",
        "Fast, friendly and permanently hungry.",
        "2019-10-30",
    ),
    (
        2,
        "Biscuit",
        "https://rescue.example.com/avatars/biscuit.png",
        "Naps through thunderstorms, melts for belly rubs.",
        "2020-01-17",
    ),
    (
        3,
        "Pepper",
        "https://rescue.example.com/avatars/pepper.png",
        "Small dog, enormous opinions.",
        "2020-03-05",
    ),
    (
        4,
        "Willow",
        "https://rescue.example.com/avatars/willow.png",
        "Shy at first, then glued to your ankles.",
        "2020-06-21",
    ),
    (
        5,
        "Atlas",
        "https://rescue.example.com/avatars/atlas.png",
        "Retired farm dog looking for a softer job.",
        "2020-09-02",
    ),
    (
        6,
        "Clover",
        "https://rescue.example.com/avatars/clover.png",
        "Three legs, twice the enthusiasm.",
        "2020-11-11",
    ),
    (
        7,
        "Maple",
        "https://rescue.example.com/avatars/maple.png",
        "Senior cat, expert sunbeam locator.",
        "2021-02-08",
    ),
    (
        8,
        "Ziggy",
        "https://rescue.example.com/avatars/ziggy.png",
        "Escape artist; fences are a suggestion.",
        "2021-04-19",
    ),
    (
        9,
        "Nimbus",
        "https://rescue.example.com/avatars/nimbus.png",
        "Fluffy cloud with paws, allergic to hurrying.",
        "2021-07-27",
    ),
    (
        10,
        "Tango",
        "https://rescue.example.com/avatars/tango.png",
        "Young parrot, vocabulary growing daily.",
        "2021-12-03",
    ),
];

/// `(adopter_name, email, notes)` — standing requests against animal 1.
const ANIMAL_ONE_REQUESTS: &[(&str, &str, &str)] = &[
    (
        "amara",
        "amara@example.com",
        "We meet every morning at the shelter.",
    ),
    (
        "bert",
        "bert@example.com",
        "My kids keep asking about Chocobo.",
    ),
    (
        "cora",
        "cora@example.com",
        "Large fenced yard and no other pets.",
    ),
];

/// Loads the demo catalogue into an empty store.
///
/// Ten animals, with three standing adoption requests against animal 1 so
/// the ownership rules have data to bite on from the first boot. Request
/// ids continue from the seeded ones.
pub fn seed_rescue_data(store: &InMemoryRescueStore) -> Result<(), StoreError> {
    for animal in catalog()? {
        store.insert_animal(animal)?;
    }

    let chocobo = AnimalId::new(1);
    for (adopter_name, email, notes) in ANIMAL_ONE_REQUESTS {
        store.create(
            chocobo,
            (*adopter_name).to_string(),
            (*email).to_string(),
            (*notes).to_string(),
        )?;
    }

    tracing::info!(
        animals = ANIMALS.len(),
        requests = ANIMAL_ONE_REQUESTS.len(),
        "seeded demo catalogue"
    );
    Ok(())
}

fn catalog() -> Result<Vec<Animal>, StoreError> {
    ANIMALS
        .iter()
        .map(|(id, name, avatar_url, description, rescue_date)| {
            let date = rescue_date
                .parse::<NaiveDate>()
                .map_err(|e| DomainError::validation(format!("bad seed rescue date: {e}")))?;
            let animal = Animal::new(AnimalId::new(*id), *name, *avatar_url, *description, date)?;
            Ok(animal)
        })
        .collect()
}
