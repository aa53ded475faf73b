//! API layer - intent router and HTTP entry point.

pub mod http;
pub mod router;

pub use router::{handle_event, handle_json};
