//! Test fixtures loader for JSON event files and common test helpers.

use std::path::PathBuf;
use std::sync::Arc;

use groupcontact_domain::NumberPolicy;
use serde_json::{json, Value};

use crate::app::App;
use crate::infrastructure::directory::InMemoryDirectory;
use crate::infrastructure::settings::SkillSettings;

/// Load a JSON fixture from the test_data/ directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

/// App over a freshly seeded in-memory directory with default settings.
pub fn seeded_app() -> App {
    App::new(Arc::new(InMemoryDirectory::seeded()), &SkillSettings::default())
}

/// Seeded app that validates `number` slots with `number_policy`.
pub fn app_with_policy(number_policy: NumberPolicy) -> App {
    let settings = SkillSettings {
        number_policy,
        ..SkillSettings::default()
    };
    App::new(Arc::new(InMemoryDirectory::seeded()), &settings)
}

pub fn launch_event() -> Value {
    load_fixture("events/launch.json")
}

/// Minimal intent request event with an empty session.
pub fn intent_event(name: &str, dialog_state: Option<&str>, slots: Value) -> Value {
    let mut request = json!({
        "type": "IntentRequest",
        "requestId": "amzn1.echo-api.request.test",
        "locale": "en-US",
        "intent": { "name": name, "confirmationStatus": "NONE", "slots": slots }
    });
    if let Some(state) = dialog_state {
        request["dialogState"] = json!(state);
    }
    json!({ "version": "1.0", "session": {}, "request": request })
}
