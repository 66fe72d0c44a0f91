//! Error types for the contact directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by directory operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A required argument was empty or otherwise absent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A contact with this ID is already stored
    #[error("Contact with this ID already exists: {0}")]
    DuplicateKey(String),

    /// No contact is stored under this ID
    #[error("Contact ID not found: {0}")]
    NotFound(String),

    /// A field value broke its validation rule
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
