//! In-memory contact directory.
//!
//! Process-wide map from normalized name to number. Nothing is persisted; the
//! map is rebuilt from the seed set on every start.

use std::collections::HashMap;

use async_trait::async_trait;
use groupcontact_domain::{ContactName, PhoneNumber};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{ContactDirectory, RepoError};

/// Entries present on every fresh start.
const SEED_CONTACTS: [(&str, u64); 5] = [
    ("cody", 5095555555),
    ("trevor", 8642948274),
    ("patrick", 7394231038),
    ("isaiah", 2349872338),
    ("alex", 3298743374),
];

/// Directory backed by a `HashMap` behind an async `RwLock`.
///
/// The lock serializes writers so concurrent invocations cannot lose updates.
pub struct InMemoryDirectory {
    entries: RwLock<HashMap<ContactName, PhoneNumber>>,
}

impl InMemoryDirectory {
    /// An empty directory.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// A directory holding the fixed seed contacts.
    pub fn seeded() -> Self {
        let mut directory = Self::new();
        let entries = directory.entries.get_mut();
        for (name, number) in SEED_CONTACTS {
            match ContactName::normalize(name) {
                Ok(key) => {
                    entries.insert(key, PhoneNumber::from(number));
                }
                Err(e) => tracing::warn!(name, error = %e, "Skipping invalid seed contact"),
            }
        }
        directory
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ContactDirectory for InMemoryDirectory {
    async fn get(&self, name: &ContactName) -> Result<Option<PhoneNumber>, RepoError> {
        Ok(self.entries.read().await.get(name).cloned())
    }

    async fn set(&self, name: ContactName, number: PhoneNumber) -> Result<(), RepoError> {
        let previous = self.entries.write().await.insert(name.clone(), number);
        if previous.is_some() {
            tracing::debug!(contact = %name, "Overwrote existing contact");
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.entries.read().await.len())
    }
}
