//! Inbound events delivered by the voice platform.
//!
//! Only the fields the skill reads are modelled; everything else the platform
//! sends (context, user, device) is ignored on deserialize.

use std::collections::HashMap;

use groupcontact_domain::{DialogState, IntentKind};
use serde::{Deserialize, Serialize};

/// Opaque key-value data carried between turns of one conversation.
pub type SessionAttributes = serde_json::Map<String, serde_json::Value>;

/// One invocation from the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEvent {
    pub request: SkillRequest,
    /// Echoed back verbatim when a lookup has to be retried.
    #[serde(default)]
    pub session: SessionAttributes,
}

/// The request half of an event, discriminated by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "WireRequest", into = "WireRequest")]
pub enum SkillRequest {
    /// The user opened the skill without asking for anything yet
    LaunchRequest { request_id: Option<String> },
    /// The platform recognized an intent in the user's utterance
    IntentRequest {
        request_id: Option<String>,
        dialog_state: Option<DialogState>,
        intent: Intent,
    },
    /// Any request type the skill does not handle (e.g. `SessionEndedRequest`)
    Unsupported { request_type: String },
}

impl SkillRequest {
    pub fn request_id(&self) -> Option<&str> {
        match self {
            SkillRequest::LaunchRequest { request_id }
            | SkillRequest::IntentRequest { request_id, .. } => request_id.as_deref(),
            SkillRequest::Unsupported { .. } => None,
        }
    }
}

/// Flat shape of `request` as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireRequest {
    #[serde(rename = "type")]
    request_type: String,
    #[serde(rename = "requestId", default, skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
    #[serde(rename = "dialogState", default, skip_serializing_if = "Option::is_none")]
    dialog_state: Option<DialogState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    intent: Option<Intent>,
}

impl TryFrom<WireRequest> for SkillRequest {
    type Error = String;

    fn try_from(wire: WireRequest) -> Result<Self, Self::Error> {
        match wire.request_type.as_str() {
            "LaunchRequest" => Ok(SkillRequest::LaunchRequest {
                request_id: wire.request_id,
            }),
            "IntentRequest" => {
                let intent = wire
                    .intent
                    .ok_or_else(|| "IntentRequest is missing `intent`".to_string())?;
                Ok(SkillRequest::IntentRequest {
                    request_id: wire.request_id,
                    dialog_state: wire.dialog_state,
                    intent,
                })
            }
            _ => Ok(SkillRequest::Unsupported {
                request_type: wire.request_type,
            }),
        }
    }
}

impl From<SkillRequest> for WireRequest {
    fn from(request: SkillRequest) -> Self {
        match request {
            SkillRequest::LaunchRequest { request_id } => WireRequest {
                request_type: "LaunchRequest".to_string(),
                request_id,
                dialog_state: None,
                intent: None,
            },
            SkillRequest::IntentRequest {
                request_id,
                dialog_state,
                intent,
            } => WireRequest {
                request_type: "IntentRequest".to_string(),
                request_id,
                dialog_state,
                intent: Some(intent),
            },
            SkillRequest::Unsupported { request_type } => WireRequest {
                request_type,
                request_id: None,
                dialog_state: None,
                intent: None,
            },
        }
    }
}

/// A recognized intent with its slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    pub fn kind(&self) -> IntentKind {
        IntentKind::from_name(&self.name)
    }

    /// Value of a slot, if the platform filled it with something non-blank.
    pub fn slot_value(&self, slot: &str) -> Option<&str> {
        self.slots
            .get(slot)
            .and_then(|s| s.value.as_deref())
            .filter(|v| !v.trim().is_empty())
    }
}

/// A named value extracted from speech.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}
