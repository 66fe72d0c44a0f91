//! ContactId value object.

use super::errors::{Field, ValidationError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact IDs.
///
/// IDs are at most [`ContactId::MAX_LEN`] characters. Once a contact is
/// built its ID never changes, so this type has no mutators.
///
/// # Example
///
/// ```
/// use contact_directory::domain::ContactId;
///
/// let id = ContactId::new("c1").unwrap();
/// assert_eq!(id.as_str(), "c1");
/// assert!(ContactId::new("much-too-long-id").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(String);

impl ContactId {
    /// Maximum length of a contact ID, in characters.
    pub const MAX_LEN: usize = 10;

    /// Create a new ContactId, validating its length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooLong` if the ID is longer than
    /// [`ContactId::MAX_LEN`] characters.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        super::ensure_max_len(&id, Field::ContactId, Self::MAX_LEN)?;
        Ok(Self(id))
    }

    /// Whether the ID is the empty string.
    ///
    /// The directory treats an empty ID as absent and refuses to store it.
    /// Whitespace-only IDs are ordinary IDs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_valid() {
        let id = ContactId::new("c1").unwrap();
        assert_eq!(id.as_str(), "c1");
    }

    #[test]
    fn test_contact_id_length_boundary() {
        assert!(ContactId::new("0123456789").is_ok());
        let err = ContactId::new("01234567890").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Contact ID cannot be longer than 10 characters."
        );
    }

    #[test]
    fn test_contact_id_empty() {
        assert!(ContactId::new("").unwrap().is_empty());
        assert!(!ContactId::new("   ").unwrap().is_empty());
        assert!(!ContactId::new("c1").unwrap().is_empty());
    }

    #[test]
    fn test_contact_id_display() {
        let id = ContactId::new("c42").unwrap();
        assert_eq!(format!("{}", id), "c42");
    }

    #[test]
    fn test_contact_id_serialization() {
        let id = ContactId::new("c1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"c1\"");
    }

    #[test]
    fn test_contact_id_deserialization_too_long_fails() {
        let result: Result<ContactId, _> = serde_json::from_str("\"abcdefghijk\"");
        assert!(result.is_err());
    }
}
