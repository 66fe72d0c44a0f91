//! In-memory contact directory.
//!
//! Owns every stored contact, enforces ID uniqueness and existence, and
//! routes field updates to the matching record.

use super::snapshot::ContactSnapshot;
use crate::config::Config;
use crate::domain::ValidationError;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Contact;
use crate::observability::DirectoryMetrics;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A keyed collection of contacts.
///
/// The directory is the sole owner of each contact it stores, and the key
/// for every entry is that contact's ID. Every operation either succeeds
/// completely or fails without changing anything.
///
/// This type does no internal locking; see
/// [`SharedContactDirectory`](super::SharedContactDirectory) for concurrent use.
#[derive(Debug, Default)]
pub struct ContactDirectory {
    contacts: HashMap<String, Contact>,
    metrics: DirectoryMetrics,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directory with room for `capacity` contacts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: HashMap::with_capacity(capacity),
            metrics: DirectoryMetrics::new(),
        }
    }

    /// Create an empty directory sized and instrumented per `config`.
    pub fn from_config(config: &Config) -> Self {
        let metrics = if config.metrics_enabled {
            DirectoryMetrics::new()
        } else {
            DirectoryMetrics::disabled()
        };

        Self {
            contacts: HashMap::with_capacity(config.initial_capacity),
            metrics,
        }
    }

    /// Store a new contact.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the contact's ID is empty
    /// - `DuplicateKey` if a contact with the same ID is already stored;
    ///   the stored contact is left untouched
    pub fn add(&mut self, contact: Contact) -> DirectoryResult<()> {
        if contact.contact_id().is_empty() {
            return Err(self.reject(
                "add",
                contact.id(),
                DirectoryError::InvalidArgument("Contact ID cannot be empty.".to_string()),
            ));
        }

        let id = contact.id().to_string();
        if self.contacts.contains_key(&id) {
            return Err(self.reject("add", &id, DirectoryError::DuplicateKey(id.clone())));
        }

        debug!(contact_id = %id, "Contact added");
        self.contacts.insert(id, contact);
        self.metrics.record_add();
        Ok(())
    }

    /// Remove the contact stored under `id` and hand it back.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `id` is empty
    /// - `NotFound` if no contact has this ID
    pub fn delete(&mut self, id: &str) -> DirectoryResult<Contact> {
        if let Err(e) = Self::check_id(id) {
            return Err(self.reject("delete", id, e));
        }

        match self.contacts.remove(id) {
            Some(contact) => {
                debug!(contact_id = %id, "Contact deleted");
                self.metrics.record_delete();
                Ok(contact)
            }
            None => Err(self.reject("delete", id, DirectoryError::NotFound(id.to_string()))),
        }
    }

    /// Replace the first name of the contact stored under `id`.
    pub fn update_first_name(
        &mut self,
        id: &str,
        first_name: impl Into<String>,
    ) -> DirectoryResult<()> {
        self.update_with("update_first_name", id, |c| c.set_first_name(first_name))
    }

    /// Replace the last name of the contact stored under `id`.
    pub fn update_last_name(
        &mut self,
        id: &str,
        last_name: impl Into<String>,
    ) -> DirectoryResult<()> {
        self.update_with("update_last_name", id, |c| c.set_last_name(last_name))
    }

    /// Replace the phone number of the contact stored under `id`.
    ///
    /// [`update_number`](Self::update_number) is an alias for this method.
    pub fn update_phone(&mut self, id: &str, phone: impl Into<String>) -> DirectoryResult<()> {
        self.update_with("update_phone", id, |c| c.set_phone(phone))
    }

    /// Alias for [`update_phone`](Self::update_phone).
    pub fn update_number(&mut self, id: &str, number: impl Into<String>) -> DirectoryResult<()> {
        self.update_phone(id, number)
    }

    /// Replace the address of the contact stored under `id`.
    pub fn update_address(&mut self, id: &str, address: impl Into<String>) -> DirectoryResult<()> {
        self.update_with("update_address", id, |c| c.set_address(address))
    }

    /// Copy the current contents into an immutable snapshot.
    pub fn list_all(&self) -> ContactSnapshot {
        ContactSnapshot::new(
            self.contacts
                .iter()
                .map(|(id, contact)| (id.clone(), contact.clone()))
                .collect(),
        )
    }

    /// Look up a contact by ID.
    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.contacts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn metrics(&self) -> &DirectoryMetrics {
        &self.metrics
    }

    /// Find the contact for `id` and apply a validating setter to it.
    fn update_with<F>(&mut self, operation: &'static str, id: &str, apply: F) -> DirectoryResult<()>
    where
        F: FnOnce(&mut Contact) -> Result<(), ValidationError>,
    {
        if let Err(e) = Self::check_id(id) {
            return Err(self.reject(operation, id, e));
        }

        let result = match self.contacts.get_mut(id) {
            Some(contact) => apply(contact).map_err(DirectoryError::from),
            None => Err(DirectoryError::NotFound(id.to_string())),
        };

        match result {
            Ok(()) => {
                debug!(contact_id = %id, operation = operation, "Contact updated");
                self.metrics.record_update();
                Ok(())
            }
            Err(e) => Err(self.reject(operation, id, e)),
        }
    }

    fn check_id(id: &str) -> DirectoryResult<()> {
        if id.is_empty() {
            return Err(DirectoryError::InvalidArgument(
                "Contact ID cannot be empty.".to_string(),
            ));
        }
        Ok(())
    }

    fn reject(&self, operation: &'static str, id: &str, error: DirectoryError) -> DirectoryError {
        warn!(contact_id = %id, operation = operation, error = %error, "Directory operation rejected");
        self.metrics.record_rejection(operation);
        error
    }
}
