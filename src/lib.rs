//! Contact Directory - an in-memory store of validated contact records.
//!
//! Contacts validate their own fields on construction and on every update,
//! so an invalid record can never be observed. A [`ContactDirectory`] owns
//! the stored contacts, keyed by ID, and routes updates to them.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for each contact field
//! - **models**: The `Contact` entity
//! - **services**: The directory, its read-only snapshot and a thread-safe wrapper
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Tracing setup and operation metrics
//!
//! # Example
//!
//! ```
//! use contact_directory::{Contact, ContactDirectory, DirectoryError};
//!
//! let mut directory = ContactDirectory::new();
//! let alice = Contact::new("c1", "Alice", "Smith", "1234567890", "1 Road").unwrap();
//! directory.add(alice).unwrap();
//!
//! assert!(matches!(
//!     directory.update_phone("c1", "badphone"),
//!     Err(DirectoryError::Validation(_))
//! ));
//! assert_eq!(directory.list_all()["c1"].phone(), "1234567890");
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;

pub use config::Config;
pub use domain::{Field, ValidationError};
pub use error::{ConfigError, ConfigResult, DirectoryError, DirectoryResult};
pub use models::Contact;
pub use observability::{init_tracing, DirectoryMetrics, MetricsSummary};
pub use services::{ContactDirectory, ContactSnapshot, SharedContactDirectory};
