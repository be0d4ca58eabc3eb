//! Locale code value type.

use serde::{Deserialize, Serialize};

/// A BCP 47-style locale code (e.g. `es-ES`, `en-US`, `pt-BR`).
///
/// Locales are opaque keys: lookup is exact-match, and unknown codes fall
/// back to the registry default rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for Locale {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Locale {
    fn from(value: String) -> Self {
        Self(value)
    }
}
