//! Normalized directory key for a contact.
//!
//! The voice platform hands over whatever it heard ("Cody Smith", "cody.smith",
//! "CODY SMITH"). All of those must land on the same directory entry, so the key
//! is built by removing every space and period and lowercasing the rest.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A normalized contact key (no spaces, no periods, lowercase, non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactName(String);

impl ContactName {
    /// Normalize a spoken name into a directory key.
    ///
    /// Normalizing an already-normalized key returns the same key.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if nothing remains after stripping
    /// spaces and periods.
    pub fn normalize(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let key: String = raw
            .as_ref()
            .chars()
            .filter(|c| *c != ' ' && *c != '.')
            .collect::<String>()
            .to_lowercase();

        if key.is_empty() {
            return Err(DomainError::validation("Contact name cannot be empty"));
        }
        Ok(Self(key))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ContactName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::normalize(s)
    }
}

impl TryFrom<&str> for ContactName {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::normalize(s)
    }
}

impl From<ContactName> for String {
    fn from(name: ContactName) -> String {
        name.0
    }
}
