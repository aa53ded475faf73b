//! Use cases - one handler per intent.
//!
//! Each handler reads or writes the directory through the port trait and
//! answers with a response envelope. Failures are reported as `SkillError` and
//! turned into speech (or surfaced to the host) by the router.

mod builtin;
mod error;
mod find_by_name;
mod launch;
mod set_info;
pub mod validation;

use std::sync::Arc;

pub use builtin::BuiltinIntents;
pub use error::SkillError;
pub use find_by_name::{FindByName, FIND_NAME_TITLE};
pub use launch::Launch;
pub use set_info::{SetInfo, INFO_TITLE};

/// Container for intent use cases.
pub struct IntentUseCases {
    pub launch: Launch,
    pub find_by_name: Arc<FindByName>,
    pub set_info: Arc<SetInfo>,
    pub builtin: BuiltinIntents,
}
