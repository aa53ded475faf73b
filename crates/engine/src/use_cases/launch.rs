//! Greeting for a bare skill launch.

use groupcontact_shared::{continuation_response, ResponseEnvelope, SessionAttributes};

const WELCOME_TITLE: &str = "Welcome";
const WELCOME_TEXT: &str = "Welcome to the Group Contact Demonstration!";

/// Session start: greet the user and keep the session open.
pub struct Launch;

impl Launch {
    pub fn execute(&self) -> ResponseEnvelope {
        continuation_response(WELCOME_TITLE, WELCOME_TEXT, SessionAttributes::new())
    }
}
