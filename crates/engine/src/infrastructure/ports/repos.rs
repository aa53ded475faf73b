//! Repository port traits.

use async_trait::async_trait;
use groupcontact_domain::{ContactName, PhoneNumber};

use super::error::RepoError;

// =============================================================================
// Contact Directory
// =============================================================================

/// Name-to-number directory.
///
/// Keys are already normalized (`ContactName`), so read and write paths agree.
/// Writes are last-write-wins; there is no delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactDirectory: Send + Sync {
    async fn get(&self, name: &ContactName) -> Result<Option<PhoneNumber>, RepoError>;
    async fn set(&self, name: ContactName, number: PhoneNumber) -> Result<(), RepoError>;
    async fn count(&self) -> Result<usize, RepoError>;
}
