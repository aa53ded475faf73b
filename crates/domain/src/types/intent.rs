//! The closed set of intents the skill understands.

use std::fmt;

/// Intent classification produced by the platform's NLU layer.
///
/// Names are matched exactly, including case, against the interaction model.
/// Anything else is kept as `Unknown` so the router can answer it gracefully.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntentKind {
    FindByName,
    SetInfo,
    Cancel,
    Help,
    Stop,
    Unknown(String),
}

impl IntentKind {
    pub const FIND_BY_NAME: &'static str = "findByNameIntent";
    pub const SET_INFO: &'static str = "setInfoIntent";
    pub const CANCEL: &'static str = "AMAZON.CancelIntent";
    pub const HELP: &'static str = "AMAZON.HelpIntent";
    pub const STOP: &'static str = "AMAZON.StopIntent";

    pub fn from_name(name: &str) -> Self {
        match name {
            Self::FIND_BY_NAME => IntentKind::FindByName,
            Self::SET_INFO => IntentKind::SetInfo,
            Self::CANCEL => IntentKind::Cancel,
            Self::HELP => IntentKind::Help,
            Self::STOP => IntentKind::Stop,
            other => IntentKind::Unknown(other.to_string()),
        }
    }

    /// The platform's name for this intent.
    pub fn name(&self) -> &str {
        match self {
            IntentKind::FindByName => Self::FIND_BY_NAME,
            IntentKind::SetInfo => Self::SET_INFO,
            IntentKind::Cancel => Self::CANCEL,
            IntentKind::Help => Self::HELP,
            IntentKind::Stop => Self::STOP,
            IntentKind::Unknown(name) => name,
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
