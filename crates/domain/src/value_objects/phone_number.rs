//! Phone numbers as stored in the directory.
//!
//! The platform extracts numbers from speech as text. How much of that text is
//! trusted depends on the [`NumberPolicy`] in force.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Characters a caller may use to format a number; dropped in strict mode.
const FORMATTING_CHARS: [char; 5] = [' ', '-', '(', ')', '+'];

const MIN_STRICT_DIGITS: usize = 7;
const MAX_STRICT_DIGITS: usize = 15;

/// How slot values are turned into phone numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberPolicy {
    /// Store whatever the platform extracted (trimmed, non-empty).
    #[default]
    Permissive,
    /// Require 7-15 ASCII digits once formatting characters are removed.
    Strict,
}

impl fmt::Display for NumberPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberPolicy::Permissive => write!(f, "permissive"),
            NumberPolicy::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for NumberPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(DomainError::parse(format!("Unknown number policy: {}", other))),
        }
    }
}

/// A phone number held by the directory, rendered digit by digit when spoken.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Build a number from a slot value under the given policy.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the value is blank, or, under
    /// [`NumberPolicy::Strict`], if it is not 7-15 digits.
    pub fn parse(raw: &str, policy: NumberPolicy) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Phone number cannot be empty"));
        }

        match policy {
            NumberPolicy::Permissive => Ok(Self(trimmed.to_string())),
            NumberPolicy::Strict => {
                let digits: String = trimmed
                    .chars()
                    .filter(|c| !FORMATTING_CHARS.contains(c))
                    .collect();
                if !digits.chars().all(|c| c.is_ascii_digit()) {
                    return Err(DomainError::validation(format!(
                        "Phone number must contain only digits: {}",
                        trimmed
                    )));
                }
                if !(MIN_STRICT_DIGITS..=MAX_STRICT_DIGITS).contains(&digits.len()) {
                    return Err(DomainError::validation(format!(
                        "Phone number must have {} to {} digits",
                        MIN_STRICT_DIGITS, MAX_STRICT_DIGITS
                    )));
                }
                Ok(Self(digits))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for PhoneNumber {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
