//! JSON file record source.

use crate::domain::error::{Result, RosterError};
use crate::domain::Record;
use crate::source::{parse_records, RecordSource};
use std::path::{Path, PathBuf};

/// Reads the dataset from a JSON array on the local filesystem.
///
/// The file is read fresh on every fetch, so a reload picks up edits made
/// outside the console.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<Record>> {
        let _span = tracing::debug_span!("json_fetch", path = %self.path.display()).entered();

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            RosterError::SourceUnavailable(format!("failed to read {}: {e}", self.path.display()))
        })?;
        let records = parse_records(&contents, &self.describe())?;

        tracing::debug!(count = records.len(), "loaded records from file");
        Ok(records)
    }
}
