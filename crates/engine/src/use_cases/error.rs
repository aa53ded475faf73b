//! Skill error taxonomy.
//!
//! Every failure is one of three kinds:
//! - handled: answered with a fixed spoken fallback
//! - recoverable: the session stays open and the user is asked again
//! - fatal: surfaced to the host as an invocation failure

use groupcontact_shared::{
    continuation_response, plain_response, ResponseEnvelope, SessionAttributes,
};

use crate::infrastructure::ports::RepoError;

const UNKNOWN_INTENT_TITLE: &str = "Unknown";
const UNKNOWN_INTENT_TEXT: &str = "Sorry, I don't know how to help with that.";
const NO_DIALOG_TEXT: &str = "No dialog";
const INVALID_NUMBER_TEXT: &str =
    "That doesn't sound like a phone number. Please say it again.";

#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    #[error("Unrecognized dialog state: {state}")]
    UnrecognizedDialogState { title: &'static str, state: String },

    #[error("Missing {slot} slot")]
    MissingSlot {
        title: &'static str,
        slot: &'static str,
    },

    #[error("Invalid phone number: {value}")]
    InvalidNumber { title: &'static str, value: String },

    #[error("Unsupported request type: {0}")]
    UnsupportedRequestType(String),

    #[error("Malformed event: {0}")]
    MalformedEvent(String),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl SkillError {
    /// Whether the host has to see this error instead of the user hearing it.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SkillError::UnsupportedRequestType(_)
                | SkillError::MalformedEvent(_)
                | SkillError::Repo(_)
        )
    }

    /// Turn a handled or recoverable error into speech.
    ///
    /// Fatal errors come back unchanged as `Err`.
    pub fn into_spoken(
        self,
        session: &SessionAttributes,
    ) -> Result<ResponseEnvelope, SkillError> {
        match self {
            SkillError::UnknownIntent(name) => {
                tracing::warn!(intent = %name, "Unknown intent, answering with fallback");
                Ok(plain_response(UNKNOWN_INTENT_TITLE, UNKNOWN_INTENT_TEXT))
            }
            SkillError::UnrecognizedDialogState { title, state } => {
                tracing::warn!(dialog_state = %state, "Unrecognized dialog state");
                Ok(plain_response(title, NO_DIALOG_TEXT))
            }
            SkillError::MissingSlot { title, slot } => {
                tracing::warn!(slot, "Required slot missing, prompting again");
                let prompt = format!("I didn't catch the {slot}. Please say it again.");
                Ok(continuation_response(title, &prompt, session.clone()))
            }
            SkillError::InvalidNumber { title, value } => {
                tracing::warn!(value = %value, "Rejected phone number, prompting again");
                Ok(continuation_response(
                    title,
                    INVALID_NUMBER_TEXT,
                    session.clone(),
                ))
            }
            fatal @ (SkillError::UnsupportedRequestType(_)
            | SkillError::MalformedEvent(_)
            | SkillError::Repo(_)) => {
                tracing::error!(error = %fatal, "Event cannot be answered");
                Err(fatal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groupcontact_shared::{Card, OutputSpeech};
    use serde_json::json;

    fn session() -> SessionAttributes {
        let mut attrs = SessionAttributes::new();
        attrs.insert("sessionId".to_string(), json!("s-42"));
        attrs
    }

    #[test]
    fn unknown_intent_is_spoken_and_ends_session() {
        let envelope = SkillError::UnknownIntent("orderPizzaIntent".to_string())
            .into_spoken(&session())
            .unwrap();

        assert!(envelope.response.should_end_session);
        assert_eq!(
            envelope.response.output_speech,
            Some(OutputSpeech::PlainText {
                text: UNKNOWN_INTENT_TEXT.to_string()
            })
        );
    }

    #[test]
    fn unrecognized_dialog_state_says_no_dialog() {
        let envelope = SkillError::UnrecognizedDialogState {
            title: "info_intent",
            state: "absent".to_string(),
        }
        .into_spoken(&session())
        .unwrap();

        assert_eq!(
            envelope.response.card,
            Some(Card::Simple {
                title: "info_intent".to_string(),
                content: "No dialog".to_string(),
            })
        );
        assert!(envelope.response.should_end_session);
    }

    #[test]
    fn missing_slot_prompts_again_and_keeps_session() {
        let envelope = SkillError::MissingSlot {
            title: "find_name_intent",
            slot: "name",
        }
        .into_spoken(&session())
        .unwrap();

        assert!(!envelope.response.should_end_session);
        assert_eq!(envelope.session_attributes, session());
        assert_eq!(
            envelope.response.output_speech,
            Some(OutputSpeech::PlainText {
                text: "I didn't catch the name. Please say it again.".to_string()
            })
        );
    }

    #[test]
    fn invalid_number_prompts_again_and_keeps_session() {
        let envelope = SkillError::InvalidNumber {
            title: "info_intent",
            value: "call me maybe".to_string(),
        }
        .into_spoken(&session())
        .unwrap();

        assert!(!envelope.response.should_end_session);
        assert_eq!(envelope.session_attributes, session());
        assert_eq!(
            envelope.response.output_speech,
            Some(OutputSpeech::PlainText {
                text: "That doesn't sound like a phone number. Please say it again.".to_string()
            })
        );
        assert_eq!(
            envelope.response.card,
            Some(Card::Simple {
                title: "info_intent".to_string(),
                content: "That doesn't sound like a phone number. Please say it again."
                    .to_string(),
            })
        );
    }

    #[test]
    fn fatal_errors_are_returned() {
        for err in [
            SkillError::UnsupportedRequestType("SessionEndedRequest".to_string()),
            SkillError::MalformedEvent("missing field `request`".to_string()),
            SkillError::Repo(RepoError::storage("get", "disk gone")),
        ] {
            assert!(err.is_fatal());
            assert!(err.into_spoken(&session()).is_err());
        }
    }

    #[test]
    fn handled_errors_are_not_fatal() {
        assert!(!SkillError::UnknownIntent("x".to_string()).is_fatal());
        assert!(!SkillError::MissingSlot {
            title: "info_intent",
            slot: "number"
        }
        .is_fatal());
    }
}
