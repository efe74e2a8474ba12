use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A coarse capability grant carried in token claims.
///
/// Just an opaque string to this crate; the API decides which operations
/// want which grant. Submitting, editing or withdrawing an adoption request
/// all want `"adoption.request"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Authority(Cow<'static, str>);

impl Authority {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Authority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
