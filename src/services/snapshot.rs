//! Read-only snapshot of directory contents.

use crate::models::Contact;
use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Index;

/// An owned, immutable copy of a directory's id → contact mapping.
///
/// A snapshot has no mutators and shares nothing with the directory that
/// produced it: later adds, deletes and updates are not reflected here.
/// Entries are ordered by ID, so two snapshots of the same contents compare
/// and serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactSnapshot {
    contacts: BTreeMap<String, Contact>,
}

impl ContactSnapshot {
    pub(crate) fn new(contacts: BTreeMap<String, Contact>) -> Self {
        Self { contacts }
    }

    /// Look up a contact by ID.
    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.get(id)
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.contacts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate over `(id, contact)` pairs in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Contact)> {
        self.contacts.iter().map(|(id, contact)| (id.as_str(), contact))
    }

    /// Iterate over the stored IDs in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.contacts.keys().map(String::as_str)
    }

    /// Serialize the snapshot as a JSON object keyed by contact ID.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<'a> IntoIterator for &'a ContactSnapshot {
    type Item = (&'a String, &'a Contact);
    type IntoIter = btree_map::Iter<'a, String, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

/// Panics if no contact has the given ID, like `BTreeMap`'s own indexing.
impl Index<&str> for ContactSnapshot {
    type Output = Contact;

    fn index(&self, id: &str) -> &Contact {
        &self.contacts[id]
    }
}
