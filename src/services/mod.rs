//! Application service layer.
//!
//! The directory owns stored contacts and enforces key uniqueness and
//! existence; field rules stay with the [`Contact`] model.

mod contact_directory;
mod shared_directory;
mod snapshot;

pub use contact_directory::ContactDirectory;
pub use shared_directory::SharedContactDirectory;
pub use snapshot::ContactSnapshot;

// Re-export common types used by services
pub use crate::models::Contact;
