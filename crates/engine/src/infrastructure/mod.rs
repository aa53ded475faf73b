//! Infrastructure implementations.
//!
//! Contains port trait implementations and runtime configuration.

pub mod directory;
pub mod ports;
pub mod settings;
