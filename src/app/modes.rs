//! Input mode and load status types for the interactive shell.
//!
//! The shell operates in one of three input modes:
//! - **Normal**: navigation, selection and row commands
//! - **Search**: typing a filter term, applied on submit
//! - **Editing**: typing into one field of the open inline edit
//!
//! # Example
//!
//! ```rust
//! use roster::app::InputMode;
//! use roster::domain::DraftField;
//!
//! let mode = InputMode::Editing(DraftField::Email);
//! assert_ne!(mode, InputMode::default());
//! ```

use crate::domain::DraftField;
use chrono::{DateTime, Local};

/// Current input handling mode.
///
/// Controls which keybindings are active and which footer hints are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    #[default]
    Normal,

    /// Typing into the search box. The term is applied only on submit.
    Search,

    /// Typing into one field of the open inline edit.
    Editing(DraftField),
}

/// Progress of the one-time dataset fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Fetch requested, nothing delivered yet.
    #[default]
    Loading,

    /// Dataset delivered and installed in the table.
    Ready {
        /// Number of records delivered.
        count: usize,
        /// When the dataset arrived.
        loaded_at: DateTime<Local>,
    },

    /// The source failed; the table is empty until a reload succeeds.
    Failed {
        /// Error reported by the source.
        message: String,
    },
}
