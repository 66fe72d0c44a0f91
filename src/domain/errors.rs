//! Domain validation errors.

use std::fmt;
use thiserror::Error;

/// The contact field a validation rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ContactId,
    FirstName,
    LastName,
    Phone,
    Address,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ContactId => "Contact ID",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Phone => "Phone",
            Self::Address => "Address",
        };
        f.write_str(label)
    }
}

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value exceeds the maximum length for its field.
    #[error("{field} cannot be longer than {max} characters.")]
    TooLong { field: Field, max: usize },

    /// The provided phone number is not exactly ten decimal digits.
    #[error("Phone must be exactly 10 digits.")]
    InvalidPhone(String),
}

impl ValidationError {
    /// The field whose rule was violated.
    pub fn field(&self) -> Field {
        match self {
            Self::TooLong { field, .. } => *field,
            Self::InvalidPhone(_) => Field::Phone,
        }
    }
}
