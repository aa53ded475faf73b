//! Built-in platform intents. Fixed answers, no directory access.

use groupcontact_shared::{plain_response, ResponseEnvelope};

pub struct BuiltinIntents;

impl BuiltinIntents {
    pub fn cancel(&self) -> ResponseEnvelope {
        plain_response("Cancel", "You want to cancel")
    }

    // TODO: confirm with the interaction model owners whether this card should be titled "Help".
    pub fn help(&self) -> ResponseEnvelope {
        plain_response("Cancel", "You want help")
    }

    pub fn stop(&self) -> ResponseEnvelope {
        plain_response("Stop", "You want to stop")
    }
}
