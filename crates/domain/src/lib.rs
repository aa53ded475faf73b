//! Group Contact domain vocabulary.
//!
//! Pure data types with no I/O: the normalized contact key, the stored phone
//! number, and the intent/dialog vocabulary the voice platform speaks in.

pub mod error;
pub mod types;
pub mod value_objects;

pub use error::DomainError;
pub use types::{DialogState, IntentKind};
pub use value_objects::{ContactName, NumberPolicy, PhoneNumber};
