//! Error types for the roster console.
//!
//! This module defines the centralized error type [`RosterError`] and a type alias
//! [`Result`] used throughout the crate. The table controller only ever produces
//! the first three variants; the rest come from the data source, configuration,
//! and theme loading at the edges of the program.

use crate::domain::record::RecordId;
use thiserror::Error;

/// The main error type for roster operations.
///
/// Controller errors are recoverable: the operation that produced them leaves
/// the table untouched, so the caller may log the error and carry on.
///
/// # Examples
///
/// ```
/// use roster::domain::{RecordId, RosterError};
///
/// let err = RosterError::NotFound(RecordId::from("7"));
/// assert_eq!(err.to_string(), "record not found: 7");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// An operation referenced a record id that is not in the collection.
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// A draft operation was called while no edit is open.
    #[error("no edit in progress")]
    NoActiveEdit,

    /// A role field was set to text that names no known role.
    #[error("invalid role: {0:?} (expected \"member\" or \"admin\")")]
    InvalidRole(String),

    /// The data source failed to deliver the dataset.
    ///
    /// The table stays in its empty state; the shell may retry by fetching again.
    #[error("record source unavailable: {0}")]
    SourceUnavailable(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
