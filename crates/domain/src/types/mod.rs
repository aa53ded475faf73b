//! Shared vocabulary types used by both the domain and the wire format.
//!
//! These mirror names the voice platform defines, so they stay stable as long
//! as the platform's interaction model does.

mod dialog;
pub use dialog::DialogState;

mod intent;
pub use intent::IntentKind;
