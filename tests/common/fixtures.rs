//! Test fixtures and sample data.

use contact_directory::Contact;

/// Contact `c1`: Alice Smith.
#[allow(dead_code)]
pub fn alice() -> Contact {
    Contact::new("c1", "Alice", "Smith", "1234567890", "1 Road").expect("valid fixture")
}

/// Contact `c2`: Bob Jones.
#[allow(dead_code)]
pub fn bob() -> Contact {
    Contact::new("c2", "Bob", "Jones", "0987654321", "2 Lane").expect("valid fixture")
}

/// A valid contact with the given ID and otherwise fixed fields.
#[allow(dead_code)]
pub fn sample_contact(id: &str) -> Contact {
    Contact::new(id, "Sample", "Person", "5550001111", "10 Test St").expect("valid fixture")
}
