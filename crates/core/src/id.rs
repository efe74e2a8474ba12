//! Identifier newtypes, so an animal id can never stand in for a
//! request id.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an animal.
///
/// Animals are seeded with small, stable numeric ids; the listing order of
/// the catalog is ascending by this id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimalId(i64);

/// Identifier of an adoption request.
///
/// Assigned from a monotonically increasing sequence owned by the store;
/// unique across all animals.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdoptionRequestId(i64);

macro_rules! impl_i64_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw numeric id.
            ///
            /// Id allocation lives with whoever owns the sequence (seeding,
            /// the store); this constructor performs no checks.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = i64::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_i64_newtype!(AnimalId, "AnimalId");
impl_i64_newtype!(AdoptionRequestId, "AdoptionRequestId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        let id: AnimalId = "7".parse().unwrap();
        assert_eq!(id, AnimalId::new(7));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = "chocobo".parse::<AdoptionRequestId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.contains("AdoptionRequestId")),
            _ => panic!("expected InvalidId"),
        }
    }

    #[test]
    fn animal_ids_order_ascending() {
        let mut ids = vec![AnimalId::new(3), AnimalId::new(1), AnimalId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![AnimalId::new(1), AnimalId::new(2), AnimalId::new(3)]);
    }
}
