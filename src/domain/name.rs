//! PersonName value object, used for both first and last names.

use super::errors::{Field, ValidationError};
use std::fmt;

/// A validated first or last name.
///
/// The same rule applies to both name fields; the `Field` passed at
/// construction only decides which field an error message refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Maximum length of a name, in characters.
    pub const MAX_LEN: usize = 10;

    /// Validate a first name.
    pub fn first(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(name, Field::FirstName)
    }

    /// Validate a last name.
    pub fn last(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(name, Field::LastName)
    }

    fn new(name: impl Into<String>, field: Field) -> Result<Self, ValidationError> {
        let name = name.into();
        super::ensure_max_len(&name, field, Self::MAX_LEN)?;
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
