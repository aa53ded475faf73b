//! Look up a contact's number by spoken name.

use std::sync::Arc;

use groupcontact_shared::{
    continuation_response, escape_ssml, say_digits, ssml_response, Intent, ResponseEnvelope,
    SessionAttributes,
};

use crate::infrastructure::ports::ContactDirectory;

use super::error::SkillError;
use super::validation::require_contact_name;

pub const FIND_NAME_TITLE: &str = "find_name_intent";
const NOT_FOUND_TEXT: &str = "Couldn't find it in the dictionary. Try again.";

/// Look up a contact's number by spoken name.
pub struct FindByName {
    directory: Arc<dyn ContactDirectory>,
}

impl FindByName {
    pub fn new(directory: Arc<dyn ContactDirectory>) -> Self {
        Self { directory }
    }

    /// Speak the number digit by digit, or keep the session open for a retry
    /// with the caller's session attributes unchanged.
    pub async fn execute(
        &self,
        intent: &Intent,
        session: &SessionAttributes,
    ) -> Result<ResponseEnvelope, SkillError> {
        let name = require_contact_name(intent, FIND_NAME_TITLE)?;

        match self.directory.get(&name).await? {
            Some(number) => {
                tracing::info!(contact = %name, "Contact found");
                let body = format!(
                    "The number is {}",
                    say_digits(escape_ssml(number.as_str()))
                );
                Ok(ssml_response(FIND_NAME_TITLE, &body))
            }
            None => {
                tracing::info!(contact = %name, "Contact not found");
                Ok(continuation_response(
                    FIND_NAME_TITLE,
                    NOT_FOUND_TEXT,
                    session.clone(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockContactDirectory, RepoError};
    use groupcontact_domain::{ContactName, PhoneNumber};
    use groupcontact_shared::OutputSpeech;
    use mockall::predicate::*;
    use serde_json::json;

    fn find_intent(name: Option<&str>) -> Intent {
        let slots = match name {
            Some(value) => json!({ "name": { "name": "name", "value": value } }),
            None => json!({}),
        };
        serde_json::from_value(json!({ "name": "findByNameIntent", "slots": slots })).unwrap()
    }

    fn session() -> SessionAttributes {
        let mut attrs = SessionAttributes::new();
        attrs.insert("sessionId".to_string(), json!("s-1"));
        attrs.insert("attributes".to_string(), json!({ "lastName": "ghost" }));
        attrs
    }

    #[tokio::test]
    async fn found_number_is_spoken_as_digits() {
        let mut directory = MockContactDirectory::new();
        directory
            .expect_get()
            .with(eq(ContactName::normalize("isaiah").unwrap()))
            .times(1)
            .returning(|_| Ok(Some(PhoneNumber::from(2349872338))));

        let use_case = FindByName::new(Arc::new(directory));
        let envelope = use_case
            .execute(&find_intent(Some("Isaiah")), &session())
            .await
            .unwrap();

        assert!(envelope.response.should_end_session);
        assert!(envelope.session_attributes.is_empty());
        assert_eq!(
            envelope.response.output_speech,
            Some(OutputSpeech::Ssml {
                ssml: "<speak>The number is <say-as interpret-as=\"digits\">2349872338</say-as></speak>"
                    .to_string()
            })
        );
    }

    #[tokio::test]
    async fn missing_contact_keeps_session_for_retry() {
        let mut directory = MockContactDirectory::new();
        directory.expect_get().returning(|_| Ok(None));

        let use_case = FindByName::new(Arc::new(directory));
        let envelope = use_case
            .execute(&find_intent(Some("ghost")), &session())
            .await
            .unwrap();

        assert!(!envelope.response.should_end_session);
        assert_eq!(envelope.session_attributes, session());
        assert_eq!(
            envelope.response.output_speech,
            Some(OutputSpeech::PlainText {
                text: NOT_FOUND_TEXT.to_string()
            })
        );
    }

    #[tokio::test]
    async fn missing_name_slot_never_reaches_directory() {
        let mut directory = MockContactDirectory::new();
        directory.expect_get().never();

        let use_case = FindByName::new(Arc::new(directory));
        let err = use_case
            .execute(&find_intent(None), &session())
            .await
            .unwrap_err();

        assert!(matches!(err, SkillError::MissingSlot { slot: "name", .. }));
    }

    #[tokio::test]
    async fn directory_failure_is_propagated() {
        let mut directory = MockContactDirectory::new();
        directory
            .expect_get()
            .returning(|_| Err(RepoError::storage("get", "backend offline")));

        let use_case = FindByName::new(Arc::new(directory));
        let err = use_case
            .execute(&find_intent(Some("cody")), &session())
            .await
            .unwrap_err();

        assert!(matches!(err, SkillError::Repo(_)));
    }
}
