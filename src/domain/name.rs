//! ContactName value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The label a contact is stored under.
///
/// Names are opaque: any string is accepted, including ones that differ only
/// in case. Whether `Alice` and `alice` address the same record is decided by
/// [`NamePolicy`](crate::config::NamePolicy) before a name reaches this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
