//! HTTP record source backed by a blocking `reqwest` client.

use crate::domain::error::{Result, RosterError};
use crate::domain::Record;
use crate::source::{parse_records, RecordSource};
use std::time::Duration;

/// Location of the published member list used when nothing else is configured.
pub const DEFAULT_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Fetches the dataset with an HTTP GET.
///
/// Non-success status codes, timeouts, and malformed bodies all surface as
/// [`RosterError::SourceUnavailable`].
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Builds a source for `url` whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Config`] if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| RosterError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

impl RecordSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Vec<Record>> {
        let _span = tracing::debug_span!("http_fetch", url = %self.url).entered();

        let unavailable = |e: reqwest::Error| RosterError::SourceUnavailable(format!("{}: {e}", self.url));

        let response = self.client.get(&self.url).send().map_err(unavailable)?;
        let status = response.status();
        tracing::debug!(%status, "received response");

        let body = response.error_for_status().map_err(unavailable)?.text().map_err(unavailable)?;
        let records = parse_records(&body, &self.url)?;

        tracing::debug!(count = records.len(), "loaded records over http");
        Ok(records)
    }
}
