//! Slot extraction helpers shared by the intent handlers.

use groupcontact_domain::ContactName;
use groupcontact_shared::Intent;

use super::error::SkillError;

pub const NAME_SLOT: &str = "name";
pub const NUMBER_SLOT: &str = "number";

/// Value of a slot the handler cannot do without.
pub fn require_slot<'a>(
    intent: &'a Intent,
    slot: &'static str,
    title: &'static str,
) -> Result<&'a str, SkillError> {
    intent
        .slot_value(slot)
        .ok_or(SkillError::MissingSlot { title, slot })
}

/// The `name` slot, normalized into a directory key.
///
/// A name that normalizes to nothing (e.g. only periods) counts as missing.
pub fn require_contact_name(
    intent: &Intent,
    title: &'static str,
) -> Result<ContactName, SkillError> {
    let raw = require_slot(intent, NAME_SLOT, title)?;
    ContactName::normalize(raw).map_err(|e| {
        tracing::debug!(raw, error = %e, "Name slot did not normalize");
        SkillError::MissingSlot {
            title,
            slot: NAME_SLOT,
        }
    })
}
