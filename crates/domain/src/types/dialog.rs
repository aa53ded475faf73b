//! Platform-managed progress of multi-turn slot collection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dialog state attached to an intent request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DialogState {
    Started,
    InProgress,
    Completed,
    /// Unknown state, kept verbatim (for forward compatibility)
    Unknown(String),
}

impl DialogState {
    /// Whether the platform is still collecting slots for the intent.
    pub fn is_collecting(&self) -> bool {
        matches!(self, DialogState::Started | DialogState::InProgress)
    }

    /// The platform's name for this state.
    pub fn as_str(&self) -> &str {
        match self {
            DialogState::Started => "STARTED",
            DialogState::InProgress => "IN_PROGRESS",
            DialogState::Completed => "COMPLETED",
            DialogState::Unknown(raw) => raw,
        }
    }
}

impl From<String> for DialogState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "STARTED" => DialogState::Started,
            "IN_PROGRESS" => DialogState::InProgress,
            "COMPLETED" => DialogState::Completed,
            _ => DialogState::Unknown(raw),
        }
    }
}

impl From<DialogState> for String {
    fn from(state: DialogState) -> String {
        match state {
            DialogState::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
