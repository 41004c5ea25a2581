//! Record sources that deliver the dataset to the console.
//!
//! This module defines the [`RecordSource`] trait that abstracts over where the
//! member list comes from. The table controller never fetches anything itself;
//! the loader thread calls a source once and hands the records to the shell.
//!
//! # Implementations
//!
//! - [`JsonFileSource`]: reads a JSON array from a local file
//! - [`HttpSource`]: fetches the JSON array over HTTP(S)
//!
//! # Wire Format
//!
//! Both sources expect a JSON array of objects with string fields:
//!
//! ```json
//! [
//!   { "id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member" },
//!   { "id": "2", "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "admin" }
//! ]
//! ```

pub mod http;
pub mod json;

pub use http::{HttpSource, DEFAULT_URL};
pub use json::JsonFileSource;

use crate::domain::error::{Result, RosterError};
use crate::domain::Record;
use crate::infrastructure::expand_tilde;
use std::sync::Arc;
use std::time::Duration;

/// Abstraction over places the dataset can be fetched from.
///
/// Sources are shared with the loader thread, so they must be `Send + Sync`.
///
/// # Examples
///
/// ```no_run
/// use roster::source::{JsonFileSource, RecordSource};
///
/// let source = JsonFileSource::new("members.json");
/// let records = source.fetch()?;
/// println!("{} records from {}", records.len(), source.describe());
/// # Ok::<(), roster::RosterError>(())
/// ```
pub trait RecordSource: Send + Sync {
    /// Short human-readable description (a path or URL) for the header and logs.
    fn describe(&self) -> String;

    /// Fetches the full dataset.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::SourceUnavailable`] on any transport, status, or
    /// parse failure.
    fn fetch(&self) -> Result<Vec<Record>>;
}

/// Picks a source for a location string.
///
/// `http://` and `https://` locations are fetched over HTTP with `timeout`;
/// anything else is a file path with `~` expanded.
///
/// # Errors
///
/// Returns [`RosterError::Config`] if the location is blank or the HTTP client
/// cannot be built.
///
/// # Examples
///
/// ```
/// use roster::source::from_location;
/// use std::time::Duration;
///
/// let source = from_location("/tmp/members.json", Duration::from_secs(5))?;
/// assert_eq!(source.describe(), "/tmp/members.json");
/// # Ok::<(), roster::RosterError>(())
/// ```
pub fn from_location(location: &str, timeout: Duration) -> Result<Arc<dyn RecordSource>> {
    let location = location.trim();
    if location.is_empty() {
        return Err(RosterError::Config("record source location is empty".to_string()));
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        tracing::debug!(url = %location, ?timeout, "using HTTP record source");
        Ok(Arc::new(HttpSource::new(location, timeout)?))
    } else {
        let path = expand_tilde(location);
        tracing::debug!(path = %path.display(), "using file record source");
        Ok(Arc::new(JsonFileSource::new(path)))
    }
}

/// Parses the JSON wire format shared by every source.
pub(crate) fn parse_records(body: &str, origin: &str) -> Result<Vec<Record>> {
    serde_json::from_str(body)
        .map_err(|e| RosterError::SourceUnavailable(format!("invalid record data from {origin}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_location_is_a_config_error() {
        assert!(matches!(
            from_location("  ", Duration::from_secs(1)),
            Err(RosterError::Config(_))
        ));
    }

    #[test]
    fn urls_pick_the_http_source() {
        let source = from_location(DEFAULT_URL, Duration::from_secs(1)).unwrap();
        assert_eq!(source.describe(), DEFAULT_URL);
    }

    #[test]
    fn parse_rejects_non_array_payloads() {
        assert!(matches!(
            parse_records(r#"{"id":"1"}"#, "test"),
            Err(RosterError::SourceUnavailable(_))
        ));
    }
}
