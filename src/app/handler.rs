//! Event handling and state transition logic.
//!
//! This module implements the event handler that translates shell-level input
//! and loader results into [`RecordTable`](super::RecordTable) operations and
//! action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the terminal or the loader thread
//! 2. [`handle_event`] pattern-matches the event against the input mode
//! 3. State mutations happen through `RecordTable` and `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Controller errors for missing rows or a missing edit are recovered here:
//! they are logged, shown on the status line, and never abort the loop.
//!
//! # Example
//!
//! ```rust
//! use roster::app::{handle_event, AppState, Event};
//! use roster::domain::{Record, Role};
//!
//! let mut state = AppState::default();
//! let records = vec![Record::new("1", "Ann", "a@x.com", Role::Member)];
//! let (render, _) = handle_event(&mut state, &Event::RecordsLoaded { records })?;
//! assert!(render);
//! # Ok::<(), roster::RosterError>(())
//! ```

use super::modes::{InputMode, LoadStatus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{DraftField, Record, Role, RosterError};

/// Events triggered by user input or by the loader thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down one row (wraps to top).
    CursorDown,
    /// Moves the cursor up one row (wraps to bottom).
    CursorUp,

    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    /// Types one digit of a page number.
    ///
    /// Consecutive digits build a multi-digit page number while it stays in
    /// range; any other event ends the number.
    PageDigit(u8),
    /// Switches to the next supported page size.
    CyclePageSize,

    /// Opens the search box, prefilled with the applied term.
    SearchMode,
    /// Applies the search box text as the filter term.
    SubmitSearch,
    /// Appends a character to the search box or the focused draft field.
    Char(char),
    /// Removes the last character from the search box or the focused draft field.
    Backspace,
    /// Leaves the current mode; in normal mode clears the applied filter.
    Escape,

    /// Toggles the selection of the row under the cursor.
    ToggleRow,
    /// Toggles the selection of every row on the page.
    TogglePage,
    /// Deletes the row under the cursor.
    DeleteRow,
    /// Deletes every selected row.
    DeleteSelected,

    /// Opens an inline edit on the row under the cursor.
    BeginEdit,
    /// Moves focus to the next draft field.
    NextField,
    /// Saves the open edit.
    CommitEdit,
    /// Discards the open edit.
    CancelEdit,

    /// Retries the fetch after the source failed. Ignored once data is loaded.
    Reload,
    /// Leaves the program.
    Quit,

    /// The loader delivered the dataset.
    RecordsLoaded {
        /// Every record from the source.
        records: Vec<Record>,
    },

    /// The loader could not reach the source.
    LoadFailed {
        /// Error message describing the failure.
        error: String,
    },
}

/// Processes an event, mutates state, and returns whether to re-render plus actions to execute.
///
/// # Errors
///
/// Recoverable controller errors (`NotFound`, `NoActiveEdit`, `InvalidRole`) are
/// reported on the status line and never returned. Any other error is returned.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    let revision = state.table.revision();
    let mut actions = vec![];

    let had_status = state.status.take().is_some();
    if !matches!(event, Event::PageDigit(_)) {
        state.page_input = 0;
    }

    let ui_changed = match event {
        Event::CursorDown => state.move_cursor_down(),
        Event::CursorUp => state.move_cursor_up(),
        Event::NextPage => reset_cursor_if(state, |s| s.table.next_page()),
        Event::PreviousPage => reset_cursor_if(state, |s| s.table.previous_page()),
        Event::FirstPage => reset_cursor_if(state, |s| s.table.first_page()),
        Event::LastPage => reset_cursor_if(state, |s| s.table.last_page()),
        Event::PageDigit(digit) => {
            let digit = usize::from(*digit);
            let extended = state.page_input * 10 + digit;
            let target = if state.page_input > 0 && extended <= state.table.total_pages() {
                extended
            } else {
                digit
            };
            state.page_input = target;
            target > 0 && reset_cursor_if(state, |s| s.table.go_to_page(target))
        }
        Event::CyclePageSize => {
            let next = state.table.page_size().next();
            state.table.set_page_size(next);
            state.status = Some(format!("Showing {next} entries per page"));
            true
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            state.search_input = state.table.filter_term().to_string();
            true
        }
        Event::SubmitSearch => {
            if state.input_mode != InputMode::Search {
                return Ok((had_status, actions));
            }
            let term = state.search_input.clone();
            tracing::debug!(term = %term, "submitting search");
            state.input_mode = InputMode::Normal;
            state.table.search(&term);
            state.cursor = 0;
            true
        }
        Event::Char(c) => handle_char(state, *c)?,
        Event::Backspace => handle_backspace(state)?,
        Event::Escape => match state.input_mode {
            InputMode::Search => {
                state.input_mode = InputMode::Normal;
                state.search_input = state.table.filter_term().to_string();
                true
            }
            InputMode::Editing(_) => {
                state.input_mode = InputMode::Normal;
                state.table.cancel_edit();
                true
            }
            InputMode::Normal if state.table.filter_term().is_empty() => false,
            InputMode::Normal => {
                state.search_input.clear();
                if state.table.search("") {
                    state.cursor = 0;
                }
                false
            }
        },
        Event::ToggleRow => match state.cursor_record().map(|r| r.id.clone()) {
            Some(id) => state.table.toggle_select(&id),
            None => false,
        },
        Event::TogglePage => state.table.toggle_select_all_on_page(),
        Event::DeleteRow => match state.cursor_record().map(|r| (r.id.clone(), r.name.clone())) {
            Some((id, name)) => {
                let result = state.table.delete_record(&id);
                if !recover(state, result)? {
                    state.status = Some(format!("Deleted {name}"));
                }
                true
            }
            None => false,
        },
        Event::DeleteSelected => {
            let removed = state.table.delete_selected();
            if removed > 0 {
                state.status = Some(format!("Deleted {removed} selected records"));
            }
            removed > 0
        }
        Event::BeginEdit => match state.cursor_record().map(|r| r.id.clone()) {
            Some(id) => {
                let result = state.table.begin_edit(&id);
                if !recover(state, result)? {
                    state.input_mode = InputMode::Editing(DraftField::Name);
                }
                true
            }
            None => false,
        },
        Event::NextField => match state.input_mode {
            InputMode::Editing(field) => {
                state.input_mode = InputMode::Editing(field.next());
                true
            }
            _ => false,
        },
        Event::CommitEdit => {
            let target = state.table.edit().map(|e| e.target.clone());
            let result = state.table.commit_edit();
            state.input_mode = InputMode::Normal;
            if !recover(state, result)? {
                if let Some(id) = target {
                    tracing::debug!(id = %id, "edit saved");
                    state.status = Some(format!("Saved record {id}"));
                }
            }
            true
        }
        Event::CancelEdit => {
            state.input_mode = InputMode::Normal;
            state.table.cancel_edit()
        }
        Event::Reload => match state.load_status {
            LoadStatus::Failed { .. } => {
                tracing::debug!("retrying failed load");
                state.load_status = LoadStatus::Loading;
                actions.push(Action::Fetch);
                true
            }
            LoadStatus::Loading => {
                state.status = Some("Still loading records".to_string());
                true
            }
            LoadStatus::Ready { .. } => {
                tracing::debug!("reload ignored, records already loaded");
                state.status = Some("Records already loaded; reloading would discard local changes".to_string());
                true
            }
        },
        Event::Quit => return Ok((false, vec![Action::Quit])),
        Event::RecordsLoaded { records } => {
            tracing::debug!(count = records.len(), "records delivered");
            state.table.initialize(records.clone());
            state.load_status = LoadStatus::Ready {
                count: state.table.all_records().len(),
                loaded_at: chrono::Local::now(),
            };
            state.search_input.clear();
            state.cursor = 0;
            if state.input_mode == InputMode::Search {
                state.input_mode = InputMode::Normal;
            }
            true
        }
        Event::LoadFailed { error } => {
            tracing::warn!(error = %error, "record source unavailable");
            state.load_status = LoadStatus::Failed {
                message: error.clone(),
            };
            true
        }
    };

    if matches!(state.input_mode, InputMode::Editing(_)) && state.table.edit().is_none() {
        state.input_mode = InputMode::Normal;
    }
    state.clamp_cursor();

    let table_changed = state.table.revision() != revision;
    Ok((ui_changed || table_changed || had_status || state.status.is_some(), actions))
}

fn reset_cursor_if(state: &mut AppState, op: impl FnOnce(&mut AppState) -> bool) -> bool {
    let changed = op(state);
    if changed {
        state.cursor = 0;
    }
    changed
}

/// Turns recoverable controller errors into a status message.
///
/// Returns `Ok(true)` if an error was recovered, `Ok(false)` on success.
fn recover(state: &mut AppState, result: Result<()>) -> Result<bool> {
    match result {
        Ok(()) => Ok(false),
        Err(e @ (RosterError::NotFound(_) | RosterError::NoActiveEdit | RosterError::InvalidRole(_))) => {
            tracing::warn!(error = %e, "operation ignored");
            state.status = Some(e.to_string());
            Ok(true)
        }
        Err(e) => Err(e),
    }
}

fn handle_char(state: &mut AppState, c: char) -> Result<bool> {
    match state.input_mode {
        InputMode::Normal => Ok(false),
        InputMode::Search => {
            state.search_input.push(c);
            tracing::trace!(query = %state.search_input, "search input updated");
            Ok(true)
        }
        InputMode::Editing(DraftField::Role) => {
            let current = state.table.edit().map_or(Role::Member, |e| e.draft.role);
            let role = match c.to_ascii_lowercase() {
                'a' => Role::Admin,
                'm' => Role::Member,
                _ => current.toggled(),
            };
            let result = state.table.update_draft_field(DraftField::Role, role.as_str());
            recover(state, result)?;
            Ok(true)
        }
        InputMode::Editing(field) => {
            let Some(mut value) = state.table.edit().map(|e| e.draft.get(field).to_string()) else {
                return Ok(false);
            };
            value.push(c);
            let result = state.table.update_draft_field(field, &value);
            recover(state, result)?;
            Ok(true)
        }
    }
}

fn handle_backspace(state: &mut AppState) -> Result<bool> {
    match state.input_mode {
        InputMode::Normal | InputMode::Editing(DraftField::Role) => Ok(false),
        InputMode::Search => Ok(state.search_input.pop().is_some()),
        InputMode::Editing(field) => {
            let Some(mut value) = state.table.edit().map(|e| e.draft.get(field).to_string()) else {
                return Ok(false);
            };
            if value.pop().is_none() {
                return Ok(false);
            }
            let result = state.table.update_draft_field(field, &value);
            recover(state, result)?;
            Ok(true)
        }
    }
}

/// Event name for span fields without dumping whole datasets.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::RecordsLoaded { records } => write!(f, "RecordsLoaded({})", records.len()),
            other => write!(f, "{other:?}"),
        }
    }
}
