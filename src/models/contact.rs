//! Contact model representing a single directory record.

use crate::domain::{Address, ContactId, PersonName, PhoneNumber, ValidationError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Borrowed wire representation used when serializing.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactView<'a> {
    id: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    phone: &'a str,
    address: &'a str,
}

/// Owned wire representation, validated by `Contact::new` after parsing.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactRecord {
    id: String,
    first_name: String,
    last_name: String,
    phone: String,
    address: String,
}

/// A contact record.
///
/// Every field is held as a validated value object, so a `Contact` that
/// exists is always valid. The ID is fixed at construction; the other four
/// fields can be replaced through setters that validate before writing.
///
/// Equality and hashing cover all five fields, ID included.
///
/// # Example
///
/// ```
/// use contact_directory::Contact;
///
/// let mut contact = Contact::new("c1", "Alice", "Smith", "1234567890", "1 Road").unwrap();
/// assert!(contact.set_phone("badphone").is_err());
/// assert_eq!(contact.phone(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    id: ContactId,
    first_name: PersonName,
    last_name: PersonName,
    phone: PhoneNumber,
    address: Address,
}

impl Contact {
    /// Build a contact, validating every field.
    ///
    /// Fields are checked in the order id, first name, last name, phone,
    /// address; the first violation is returned.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: ContactId::new(id)?,
            first_name: PersonName::first(first_name)?,
            last_name: PersonName::last(last_name)?,
            phone: PhoneNumber::new(phone)?,
            address: Address::new(address)?,
        })
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// The ID as its value object.
    pub fn contact_id(&self) -> &ContactId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    /// Replace the first name. On error the contact is unchanged.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Result<(), ValidationError> {
        self.first_name = PersonName::first(first_name)?;
        Ok(())
    }

    /// Replace the last name. On error the contact is unchanged.
    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Result<(), ValidationError> {
        self.last_name = PersonName::last(last_name)?;
        Ok(())
    }

    /// Replace the phone number. On error the contact is unchanged.
    pub fn set_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.phone = PhoneNumber::new(phone)?;
        Ok(())
    }

    /// Replace the address. On error the contact is unchanged.
    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), ValidationError> {
        self.address = Address::new(address)?;
        Ok(())
    }
}

// Serde support - serialize as a flat object of strings
impl Serialize for Contact {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ContactView {
            id: self.id(),
            first_name: self.first_name(),
            last_name: self.last_name(),
            phone: self.phone(),
            address: self.address(),
        }
        .serialize(serializer)
    }
}

// Serde support - deserialize with the same validation as `Contact::new`
impl<'de> Deserialize<'de> for Contact {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = ContactRecord::deserialize(deserializer)?;
        Contact::new(
            record.id,
            record.first_name,
            record.last_name,
            record.phone,
            record.address,
        )
        .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact{{id='{}', first_name='{}', last_name='{}', phone='{}', address='{}'}}",
            self.id, self.first_name, self.last_name, self.phone, self.address
        )
    }
}
