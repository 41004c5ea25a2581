//! Roster: a terminal admin console for a list of member records.
//!
//! Roster loads a member list once (from a JSON file or an HTTP endpoint) and
//! gives an operator a paged table over it with:
//! - Case-insensitive search across id, name, email and role
//! - Fixed-size pages with next/previous/first/last and direct page jumps
//! - Row and whole-page selection with bulk delete
//! - Inline editing of one row at a time with save and cancel
//!
//! All mutation is client-side; nothing is written back to the source.
#![allow(clippy::multiple_crate_versions)]
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shell (main.rs)                           │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - RecordTable controller                           │  ← Core logic
//! │  - Event handling, actions                          │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Source Layer  │   │ Worker Layer  │
//! │ (ui/)         │   │ (source/)     │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON file   │   │ - Loader      │
//! │ - Theming     │   │ - HTTP        │   │   thread      │
//! │ - Components  │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Config/state paths (infrastructure/)             │
//! │  - Error types (domain/error)                       │
//! │  - Record model (domain/record)                     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing fmt layer to a rotating log file         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Record table controller plus the shell's event/action model
//! - [`domain`]: Core domain types (Record, Role, Draft, errors)
//! - [`infrastructure`]: Config and state directory resolution
//! - [`source`]: Where the dataset comes from
//! - [`worker`]: Background loader thread
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Log file setup
//!
//! # Configuration
//!
//! Settings come from `~/.config/roster/config.toml`, overridden by command
//! line flags:
//!
//! ```toml
//! source = "~/data/members.json"
//! page_size = 15
//! theme = "paper"
//! log_level = "debug"
//! fetch_timeout_secs = 5
//! ```
//!
//! # Examples
//!
//! ## Driving the controller directly
//!
//! ```rust
//! use roster::app::{PageSize, RecordTable};
//! use roster::domain::{Record, Role};
//!
//! let mut table = RecordTable::new(PageSize::Ten);
//! table.initialize(
//!     (1..=25)
//!         .map(|i| Record::new(i.to_string(), format!("user{i}"), format!("u{i}@x.com"), Role::Member))
//!         .collect(),
//! );
//! table.go_to_page(3);
//! assert_eq!(table.page_records().len(), 5);
//! assert_eq!(table.snapshot().summary(), "Showing 21 to 25 of 25 entries");
//! ```
//!
//! ## Driving the shell
//!
//! ```rust
//! use roster::{handle_event, initialize, Config, Event};
//! use roster::domain::{Record, Role};
//!
//! let mut state = initialize(&Config::default());
//! let records = vec![Record::new("1", "Ann", "ann@x.com", Role::Admin)];
//! handle_event(&mut state, &Event::RecordsLoaded { records })?;
//! handle_event(&mut state, &Event::ToggleRow)?;
//! handle_event(&mut state, &Event::DeleteSelected)?;
//! assert!(state.table.all_records().is_empty());
//! # Ok::<(), roster::RosterError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod source;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, PageSize, RecordTable};
pub use domain::{Record, RecordId, Result, Role, RosterError};
pub use ui::Theme;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Console configuration, read from TOML.
///
/// Every field has a default, so an empty or missing file is valid.
///
/// # Example
///
/// ```rust
/// use roster::{Config, PageSize};
///
/// let config: Config = toml::from_str("page_size = 20\ntheme = \"paper\"").unwrap();
/// assert_eq!(config.page_size, PageSize::Twenty);
/// assert_eq!(config.log_level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File path or `http(s)://` URL of the member list.
    ///
    /// Default: the published member list URL.
    pub source: String,

    /// Rows per page: 10, 15 or 20. Default: 10
    pub page_size: PageSize,

    /// Built-in theme name (`slate`, `paper`). Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Log level directives (`trace`, `debug`, `info`, `warn`, `error`, or
    /// `EnvFilter` syntax). Default: `"info"`
    pub log_level: String,

    /// Seconds before an HTTP fetch gives up. Default: 10
    pub fetch_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: source::DEFAULT_URL.to_string(),
            page_size: PageSize::default(),
            theme: None,
            theme_file: None,
            log_level: "info".to_string(),
            fetch_timeout_secs: 10,
        }
    }
}

/// Values given on the command line. `None` keeps the file's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub source: Option<String>,
    pub page_size: Option<PageSize>,
    pub theme: Option<String>,
    pub theme_file: Option<String>,
    pub log_level: Option<String>,
    pub fetch_timeout_secs: Option<u64>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Io`] if the file exists but cannot be read, and
    /// [`RosterError::Config`] if it is not valid TOML, has unknown keys, or
    /// names an unsupported page size.
    pub fn load(path: &Path) -> Result<Self> {
        let _span = tracing::debug_span!("load_config", path = %path.display()).entered();

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: Self = toml::from_str(&contents)
            .map_err(|e| RosterError::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(?config, "config loaded");
        Ok(config)
    }

    /// Applies command line values on top of this configuration.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(source) = overrides.source {
            self.source = source;
        }
        if let Some(page_size) = overrides.page_size {
            self.page_size = page_size;
        }
        if let Some(theme) = overrides.theme {
            self.theme = Some(theme);
            self.theme_file = None;
        }
        if let Some(theme_file) = overrides.theme_file {
            self.theme_file = Some(theme_file);
        }
        if let Some(log_level) = overrides.log_level {
            self.log_level = log_level;
        }
        if let Some(secs) = overrides.fetch_timeout_secs {
            self.fetch_timeout_secs = secs;
        }
        self
    }

    /// HTTP fetch timeout as a [`Duration`].
    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Resolves the configured theme.
    ///
    /// `theme_file` wins over `theme`; with neither set the default theme is used.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Theme`] for an unknown built-in name or an
    /// unreadable theme file.
    pub fn theme(&self) -> Result<Theme> {
        if let Some(file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(file));
        }
        match &self.theme {
            Some(name) => Theme::from_name(name).ok_or_else(|| {
                RosterError::Theme(format!(
                    "unknown theme {name:?} (built-in themes: {})",
                    ui::theme::BUILTIN_THEMES.join(", ")
                ))
            }),
            None => Ok(Theme::default()),
        }
    }
}

/// Creates the shell state for a configuration.
///
/// The table starts empty and in the loading state; the dataset arrives later
/// through [`Event::RecordsLoaded`]. A theme that fails to load is logged and
/// replaced by the default.
///
/// # Example
///
/// ```rust
/// use roster::{initialize, Config, PageSize};
///
/// let config = Config { page_size: PageSize::Fifteen, ..Config::default() };
/// let state = initialize(&config);
/// assert_eq!(state.table.page_size(), PageSize::Fifteen);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(source = %config.source, page_size = %config.page_size, "initializing roster");

    let theme = config.theme().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load theme, using default");
        Theme::default()
    });

    let mut state = AppState::new(config.page_size, theme);
    state.source_label = config.source.clone();
    state
}
