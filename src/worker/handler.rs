//! Loader thread implementation for background dataset fetches.
//!
//! The loader owns a [`RecordSource`] and runs on its own thread so a slow or
//! hanging HTTP request never blocks key handling or rendering. The shell
//! sends [`LoaderRequest`]s and drains [`LoaderResponse`]s from its event loop.

use crate::domain::error::{Result, RosterError};
use crate::source::RecordSource;
use crate::worker::{LoaderRequest, LoaderResponse};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Handle to the background loader thread.
///
/// Dropping the handle closes the request channel, which ends the loop after
/// any fetch in flight.
pub struct Loader {
    requests: Sender<LoaderRequest>,
    responses: Receiver<LoaderResponse>,
    thread: Option<JoinHandle<()>>,
    source_label: String,
}

impl Loader {
    /// Spawns the loader thread for `source`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Io`] if the thread cannot be spawned.
    pub fn spawn(source: Arc<dyn RecordSource>) -> Result<Self> {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let source_label = source.describe();

        let thread = thread::Builder::new()
            .name("roster-loader".to_string())
            .spawn(move || run(source.as_ref(), &request_rx, &response_tx))?;

        tracing::debug!(source = %source_label, "loader thread started");

        Ok(Self {
            requests: request_tx,
            responses: response_rx,
            thread: Some(thread),
            source_label,
        })
    }

    /// Description of the source this loader fetches from.
    #[must_use]
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    /// Asks the loader thread to fetch the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::SourceUnavailable`] if the loader thread is gone.
    pub fn request_fetch(&self) -> Result<()> {
        self.requests
            .send(LoaderRequest::fetch())
            .map_err(|_| RosterError::SourceUnavailable("loader thread has stopped".to_string()))
    }

    /// Returns the next response if one is ready.
    #[must_use]
    pub fn try_recv(&self) -> Option<LoaderResponse> {
        match self.responses.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                tracing::warn!("loader thread disconnected");
                None
            }
        }
    }

    /// Blocks until the next response arrives.
    ///
    /// Returns `None` if the loader thread has exited.
    #[must_use]
    pub fn recv(&self) -> Option<LoaderResponse> {
        self.responses.recv().ok()
    }

    /// Stops the loop and waits for the thread to finish its current fetch.
    pub fn shutdown(mut self) {
        let _ = self.requests.send(LoaderRequest::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("loader thread panicked");
            }
        }
    }
}

impl std::fmt::Debug for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("source", &self.source_label)
            .finish_non_exhaustive()
    }
}

fn run(source: &dyn RecordSource, requests: &Receiver<LoaderRequest>, responses: &Sender<LoaderResponse>) {
    while let Ok(request) = requests.recv() {
        match request {
            LoaderRequest::Fetch { parent } => {
                let _span = tracing::debug_span!(parent: &parent, "loader_fetch").entered();
                let response = fetch_once(source);
                if responses.send(response).is_err() {
                    tracing::debug!("shell went away, stopping loader");
                    break;
                }
            }
            LoaderRequest::Shutdown => {
                tracing::debug!("loader shutdown requested");
                break;
            }
        }
    }
}

/// Runs one fetch and wraps the outcome as a response.
fn fetch_once(source: &dyn RecordSource) -> LoaderResponse {
    match source.fetch() {
        Ok(records) => {
            tracing::info!(count = records.len(), source = %source.describe(), "dataset loaded");
            LoaderResponse::Loaded { records }
        }
        Err(e) => {
            tracing::warn!(error = %e, source = %source.describe(), "dataset fetch failed");
            LoaderResponse::Failed {
                message: e.to_string(),
            }
        }
    }
}
