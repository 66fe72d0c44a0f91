//! Domain value objects and types.
//!
//! Each contact field has its own type-safe wrapper that validates at
//! construction time, so an invalid field value can never be represented
//! in the system.

pub mod address;
pub mod contact_id;
pub mod errors;
pub mod name;
pub mod phone;

pub use address::Address;
pub use contact_id::ContactId;
pub use errors::{Field, ValidationError};
pub use name::PersonName;
pub use phone::PhoneNumber;

/// Reject `value` if it holds more than `max` characters.
///
/// Length is measured in Unicode scalar values, not bytes.
pub(crate) fn ensure_max_len(
    value: &str,
    field: Field,
    max: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_max_len_counts_chars_not_bytes() {
        // Ten two-byte characters
        assert!(ensure_max_len("éééééééééé", Field::FirstName, 10).is_ok());
        assert!(ensure_max_len("ééééééééééé", Field::FirstName, 10).is_err());
    }

    #[test]
    fn test_ensure_max_len_counts_emoji_once() {
        // Each emoji is one scalar value but two UTF-16 units.
        assert!(ensure_max_len(&"😀".repeat(6), Field::FirstName, 10).is_ok());
        assert!(ensure_max_len(&"😀".repeat(10), Field::FirstName, 10).is_ok());
        assert!(ensure_max_len(&"😀".repeat(11), Field::FirstName, 10).is_err());
    }

    #[test]
    fn test_ensure_max_len_boundary() {
        assert!(ensure_max_len("", Field::Address, 30).is_ok());
        assert!(ensure_max_len(&"a".repeat(30), Field::Address, 30).is_ok());
        assert_eq!(
            ensure_max_len(&"a".repeat(31), Field::Address, 30),
            Err(ValidationError::TooLong {
                field: Field::Address,
                max: 30
            })
        );
    }
}
