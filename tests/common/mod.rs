//! Shared helpers for integration tests.

pub mod fixtures;

use contact_directory::ContactDirectory;

/// A directory pre-loaded with the two standard fixture contacts.
#[allow(dead_code)]
pub fn seeded_directory() -> ContactDirectory {
    let mut directory = ContactDirectory::new();
    directory
        .add(fixtures::alice())
        .expect("fixture contact c1 should be accepted");
    directory
        .add(fixtures::bob())
        .expect("fixture contact c2 should be accepted");
    directory
}
