//! Thread-safe handle around a [`ContactDirectory`].

use super::contact_directory::ContactDirectory;
use super::snapshot::ContactSnapshot;
use crate::config::Config;
use crate::error::DirectoryResult;
use crate::models::Contact;
use crate::observability::DirectoryMetrics;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cloneable, lock-guarded contact directory for concurrent callers.
///
/// Every mutating call holds the write lock for its full duration; reads
/// take the read lock. Clones share the same underlying directory.
///
/// A poisoned lock is recovered rather than propagated: directory
/// operations never leave partial state behind, so the data is still valid.
#[derive(Debug, Clone, Default)]
pub struct SharedContactDirectory {
    inner: Arc<RwLock<ContactDirectory>>,
}

impl SharedContactDirectory {
    /// Create an empty shared directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty shared directory sized and instrumented per `config`.
    pub fn from_config(config: &Config) -> Self {
        ContactDirectory::from_config(config).into()
    }

    fn read(&self) -> RwLockReadGuard<'_, ContactDirectory> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ContactDirectory> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, contact: Contact) -> DirectoryResult<()> {
        self.write().add(contact)
    }

    pub fn delete(&self, id: &str) -> DirectoryResult<Contact> {
        self.write().delete(id)
    }

    pub fn update_first_name(
        &self,
        id: &str,
        first_name: impl Into<String>,
    ) -> DirectoryResult<()> {
        self.write().update_first_name(id, first_name)
    }

    pub fn update_last_name(&self, id: &str, last_name: impl Into<String>) -> DirectoryResult<()> {
        self.write().update_last_name(id, last_name)
    }

    pub fn update_phone(&self, id: &str, phone: impl Into<String>) -> DirectoryResult<()> {
        self.write().update_phone(id, phone)
    }

    /// Alias for [`update_phone`](Self::update_phone).
    pub fn update_number(&self, id: &str, number: impl Into<String>) -> DirectoryResult<()> {
        self.write().update_number(id, number)
    }

    pub fn update_address(&self, id: &str, address: impl Into<String>) -> DirectoryResult<()> {
        self.write().update_address(id, address)
    }

    pub fn list_all(&self) -> ContactSnapshot {
        self.read().list_all()
    }

    /// Look up a contact by ID, returning a copy.
    pub fn get(&self, id: &str) -> Option<Contact> {
        self.read().get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().contains(id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// A handle to the directory's counters.
    pub fn metrics(&self) -> DirectoryMetrics {
        self.read().metrics().clone()
    }
}

impl From<ContactDirectory> for SharedContactDirectory {
    fn from(directory: ContactDirectory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }
}
