use thiserror::Error;

use crate::{Authority, PrincipalName};

/// The caller as the policy checks see them: a name and a set of grants.
///
/// Built by the API layer from validated token claims; nothing in here
/// remembers where the token came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub name: PrincipalName,
    pub authorities: Vec<Authority>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing authority '{0}'")]
    MissingAuthority(String),

    #[error("forbidden: principal is not the original requester")]
    NotRequestOwner,
}

/// Coarse capability gate: the principal must hold `required`.
///
/// Pure set membership; holding extra authorities never hurts, and there is
/// no wildcard grant.
pub fn authorize(principal: &Principal, required: &Authority) -> Result<(), AuthzError> {
    if principal
        .authorities
        .iter()
        .any(|a| a.as_str() == required.as_str())
    {
        Ok(())
    } else {
        Err(AuthzError::MissingAuthority(required.as_str().to_string()))
    }
}

/// Ownership predicate: may `principal` mutate a request recorded under
/// `adopter_name`?
///
/// True iff the principal *is* the original requester. Pure, so callers can
/// evaluate it strictly before touching any store.
pub fn can_mutate(principal: &Principal, adopter_name: &str) -> bool {
    principal.name.as_str() == adopter_name
}

/// Guard form of [`can_mutate`] for the mutation boundary.
///
/// Evaluate this before any store write; a rejected mutation must leave no
/// partial state behind.
pub fn authorize_mutation(principal: &Principal, adopter_name: &str) -> Result<(), AuthzError> {
    if can_mutate(principal, adopter_name) {
        Ok(())
    } else {
        Err(AuthzError::NotRequestOwner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn principal(name: &str, authorities: &[&'static str]) -> Principal {
        Principal {
            name: PrincipalName::new(name),
            authorities: authorities.iter().map(|a| Authority::new(*a)).collect(),
        }
    }

    #[test]
    fn authorize_grants_held_authority() {
        let p = principal("test-user-1", &["adoption.request"]);
        assert!(authorize(&p, &Authority::new("adoption.request")).is_ok());
    }

    #[test]
    fn authorize_rejects_missing_authority() {
        let p = principal("test-user-1", &["something.else"]);
        let err = authorize(&p, &Authority::new("adoption.request")).unwrap_err();
        match err {
            AuthzError::MissingAuthority(name) => assert_eq!(name, "adoption.request"),
            _ => panic!("expected MissingAuthority"),
        }
    }

    #[test]
    fn authorize_rejects_empty_authority_set() {
        let p = principal("test-user-1", &[]);
        assert!(authorize(&p, &Authority::new("adoption.request")).is_err());
    }

    #[test]
    fn owner_may_mutate() {
        let p = principal("test-user-2", &["adoption.request"]);
        assert!(can_mutate(&p, "test-user-2"));
        assert!(authorize_mutation(&p, "test-user-2").is_ok());
    }

    #[test]
    fn non_owner_may_not_mutate() {
        let p = principal("test-user-2", &["adoption.request"]);
        assert!(!can_mutate(&p, "test-user-1"));
        assert_eq!(
            authorize_mutation(&p, "test-user-1").unwrap_err(),
            AuthzError::NotRequestOwner
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the ownership check is exactly name equality — no
        /// authority set, prefix, or case rule ever widens it.
        #[test]
        fn can_mutate_iff_names_equal(
            name in "\\PC*",
            owner in "\\PC*",
            authorities in prop::collection::vec("[a-z.]{1,20}", 0..4)
        ) {
            let p = Principal {
                name: PrincipalName::new(name.clone()),
                authorities: authorities.into_iter().map(Authority::new).collect(),
            };

            prop_assert_eq!(can_mutate(&p, &owner), name == owner);
            prop_assert_eq!(authorize_mutation(&p, &owner).is_ok(), name == owner);
        }
    }
}
