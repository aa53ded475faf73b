//! Add or replace a contact, letting the platform collect both slots first.

use std::sync::Arc;

use groupcontact_domain::{DialogState, NumberPolicy, PhoneNumber};
use groupcontact_shared::{
    delegate_response, escape_ssml, say_digits, ssml_response, Intent, ResponseEnvelope,
};

use crate::infrastructure::ports::ContactDirectory;

use super::error::SkillError;
use super::validation::{require_contact_name, require_slot, NUMBER_SLOT};

pub const INFO_TITLE: &str = "info_intent";

/// Add or replace a contact once the platform has collected both slots.
pub struct SetInfo {
    directory: Arc<dyn ContactDirectory>,
    policy: NumberPolicy,
}

impl SetInfo {
    pub fn new(directory: Arc<dyn ContactDirectory>, policy: NumberPolicy) -> Self {
        Self { directory, policy }
    }

    pub async fn execute(
        &self,
        dialog_state: Option<DialogState>,
        intent: &Intent,
    ) -> Result<ResponseEnvelope, SkillError> {
        match dialog_state {
            Some(DialogState::Started | DialogState::InProgress) => Ok(delegate_response()),
            Some(DialogState::Completed) => self.store(intent).await,
            Some(DialogState::Unknown(raw)) => Err(SkillError::UnrecognizedDialogState {
                title: INFO_TITLE,
                state: raw,
            }),
            None => Err(SkillError::UnrecognizedDialogState {
                title: INFO_TITLE,
                state: "absent".to_string(),
            }),
        }
    }

    async fn store(&self, intent: &Intent) -> Result<ResponseEnvelope, SkillError> {
        let name = require_contact_name(intent, INFO_TITLE)?;
        let raw_number = require_slot(intent, NUMBER_SLOT, INFO_TITLE)?;
        let number = PhoneNumber::parse(raw_number, self.policy).map_err(|e| {
            tracing::debug!(error = %e, policy = %self.policy, "Number slot rejected");
            SkillError::InvalidNumber {
                title: INFO_TITLE,
                value: raw_number.to_string(),
            }
        })?;

        self.directory.set(name.clone(), number.clone()).await?;
        tracing::info!(contact = %name, "Contact saved");

        let body = format!(
            "{} added with number {}",
            escape_ssml(name.as_str()),
            say_digits(escape_ssml(number.as_str()))
        );
        Ok(ssml_response(INFO_TITLE, &body))
    }
}
