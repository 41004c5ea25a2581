//! Domain layer for the roster console.
//!
//! This module contains the core domain types, independent of the terminal,
//! the data source, or any other infrastructure concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Record model, roles, and edit drafts
//!
//! # Examples
//!
//! ```
//! use roster::domain::{Record, Result, Role};
//!
//! fn sample() -> Result<Record> {
//!     Ok(Record::new("1", "Aaron Miles", "aaron@mailinator.com", "member".parse::<Role>()?))
//! }
//! ```

pub mod error;
pub mod record;

pub use error::{Result, RosterError};
pub use record::{Draft, DraftField, Record, RecordId, Role};
