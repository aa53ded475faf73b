//! Port traits for infrastructure boundaries.
//!
//! The contact directory is the only abstraction here. It exists so handlers
//! can be tested against a mock and so the in-memory map could later be swapped
//! for a persistent store.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::ContactDirectory;

#[cfg(test)]
pub use repos::MockContactDirectory;
