//! Group Contact Engine library.
//!
//! Voice skill backend: receives intent-recognition events from the voice
//! platform and answers with response envelopes, backed by an in-memory
//! name-to-number directory.
//!
//! ## Structure
//!
//! - `infrastructure/` - Port traits, the in-memory directory, settings
//! - `use_cases/` - One handler per intent (plus launch)
//! - `api/` - Intent router and HTTP entry point
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for router and HTTP tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
