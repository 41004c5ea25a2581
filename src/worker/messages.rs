//! Loader thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the shell
//! thread and the background loader thread that fetches the dataset. Requests
//! carry the caller's tracing span so fetch logs nest under the event that
//! asked for them.

use crate::app::Event;
use crate::domain::Record;

/// Messages sent from the shell thread to the loader thread.
#[derive(Debug)]
pub enum LoaderRequest {
    /// Fetch the whole dataset from the source.
    Fetch {
        /// Span active when the fetch was requested.
        parent: tracing::Span,
    },

    /// Stop the loader loop.
    Shutdown,
}

impl LoaderRequest {
    /// Creates a fetch request parented to the current span.
    #[must_use]
    pub fn fetch() -> Self {
        Self::Fetch {
            parent: tracing::Span::current(),
        }
    }
}

/// Responses sent from the loader thread back to the shell thread.
///
/// Every fetch request produces exactly one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderResponse {
    /// The source delivered the dataset.
    Loaded {
        /// Records in source order.
        records: Vec<Record>,
    },

    /// The source could not be reached or returned bad data.
    Failed {
        /// Human-readable error message.
        message: String,
    },
}

impl LoaderResponse {
    /// Converts the response into the shell event that installs it.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster::app::Event;
    /// use roster::worker::LoaderResponse;
    ///
    /// let response = LoaderResponse::Failed { message: "timed out".to_string() };
    /// assert_eq!(response.into_event(), Event::LoadFailed { error: "timed out".to_string() });
    /// ```
    #[must_use]
    pub fn into_event(self) -> Event {
        match self {
            Self::Loaded { records } => Event::RecordsLoaded { records },
            Self::Failed { message } => Event::LoadFailed { error: message },
        }
    }
}
