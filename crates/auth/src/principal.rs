use serde::{Deserialize, Serialize};

/// Stable identity string of an authenticated caller.
///
/// Whatever the external identity provider resolved for the request is what
/// gets recorded as the adopter name on created requests, so two tokens with
/// the same name are the same person as far as ownership goes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalName(String);

impl PrincipalName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PrincipalName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PrincipalName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PrincipalName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<PrincipalName> for String {
    fn from(value: PrincipalName) -> Self {
        value.0
    }
}
