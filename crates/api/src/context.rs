use rescue_auth::{Authority, PrincipalName};

/// Principal context for a request (authenticated identity + authorities).
///
/// Inserted by the auth middleware; present on every protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    name: PrincipalName,
    authorities: Vec<Authority>,
}

impl PrincipalContext {
    pub fn new(name: PrincipalName, authorities: Vec<Authority>) -> Self {
        Self { name, authorities }
    }

    pub fn name(&self) -> &PrincipalName {
        &self.name
    }

    pub fn authorities(&self) -> &[Authority] {
        &self.authorities
    }
}
