//! Address value object.

use super::errors::{Field, ValidationError};
use std::fmt;

/// A validated postal address of at most [`Address::MAX_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Maximum length of an address, in characters.
    pub const MAX_LEN: usize = 30;

    /// Create a new Address, validating its length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooLong` if the address is longer than
    /// [`Address::MAX_LEN`] characters.
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();
        super::ensure_max_len(&address, Field::Address, Self::MAX_LEN)?;
        Ok(Self(address))
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
