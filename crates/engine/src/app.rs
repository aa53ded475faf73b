//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::ContactDirectory;
use crate::infrastructure::settings::SkillSettings;
use crate::use_cases::{BuiltinIntents, FindByName, IntentUseCases, Launch, SetInfo};

/// Main application state.
///
/// Holds the directory port and the intent use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub directory: Arc<dyn ContactDirectory>,
    pub use_cases: IntentUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(directory: Arc<dyn ContactDirectory>, settings: &SkillSettings) -> Self {
        let find_by_name = Arc::new(FindByName::new(directory.clone()));
        let set_info = Arc::new(SetInfo::new(directory.clone(), settings.number_policy));

        let use_cases = IntentUseCases {
            launch: Launch,
            find_by_name,
            set_info,
            builtin: BuiltinIntents,
        };

        Self {
            directory,
            use_cases,
        }
    }
}
