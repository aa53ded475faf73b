//! Group Contact wire format - what the voice platform sends and expects back.
//!
//! This crate contains:
//! - Inbound event types (`SkillEvent`, `SkillRequest`, `Intent`, `Slot`)
//! - Outbound envelope types (`ResponseEnvelope`, `ResponseBody`, ...)
//! - The payload builders that assemble envelopes
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, and tracing
//! 2. **No business logic** - Pure data types, serialization, and envelope assembly
//! 3. **Platform field names** - camelCase on the wire, exactly as the platform documents

pub mod builders;
pub mod requests;
pub mod responses;

pub use builders::{
    continuation_response, delegate_response, escape_ssml, plain_response, say_digits,
    ssml_response,
};
pub use requests::{Intent, SessionAttributes, SkillEvent, SkillRequest, Slot};
pub use responses::{Card, Directive, OutputSpeech, ResponseBody, ResponseEnvelope, RESPONSE_VERSION};
