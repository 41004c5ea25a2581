//! Shell state and view model computation.
//!
//! [`AppState`] wraps the [`RecordTable`] controller with everything the
//! interactive shell needs on top of it: the input mode, the search box text
//! (typed but not yet applied), a row cursor within the current page, the load
//! status of the dataset, a transient status line, and the theme.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a table snapshot plus shell state into a
//! renderable [`UIViewModel`], handling row windowing for short terminals, match
//! highlighting, and inline-edit cell substitution.
//!
//! # Example
//!
//! ```rust
//! use roster::app::AppState;
//! use roster::domain::{Record, Role};
//!
//! let mut state = AppState::default();
//! state.table.initialize(vec![Record::new("1", "Ann", "a@x.com", Role::Member)]);
//! let viewmodel = state.compute_viewmodel(24, 100);
//! assert_eq!(viewmodel.rows.len(), 1);
//! ```

use super::modes::{InputMode, LoadStatus};
use super::table::{PageSize, RecordTable};
use crate::app::snapshot::TableSnapshot;
use crate::domain::{DraftField, Record};
use crate::ui::helpers::match_ranges;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnLayout, DisplayRow, EmptyState, FooterInfo, HeaderInfo, PagerInfo, SearchBarInfo,
    UIViewModel,
};

/// Rows taken by chrome around the table: blank, header, border, search box
/// (3), column headers, pager, border, footer, and one spare.
const CHROME_ROWS: usize = 11;

/// Central shell state container.
#[derive(Debug)]
pub struct AppState {
    /// The record table controller.
    pub table: RecordTable,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Text in the search box. Applied to the table only on submit.
    pub search_input: String,

    /// Zero-based cursor row within the current page.
    pub cursor: usize,

    /// Page number typed so far in normal mode, 0 when none.
    pub page_input: usize,

    /// Progress of the dataset fetch.
    pub load_status: LoadStatus,

    /// Transient message shown in the footer until the next command.
    pub status: Option<String>,

    /// Human-readable description of the data source.
    pub source_label: String,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PageSize::default(), Theme::default())
    }
}

impl AppState {
    /// Creates a shell with an empty table that is waiting for data.
    #[must_use]
    pub fn new(page_size: PageSize, theme: Theme) -> Self {
        Self {
            table: RecordTable::new(page_size),
            input_mode: InputMode::Normal,
            search_input: String::new(),
            cursor: 0,
            page_input: 0,
            load_status: LoadStatus::Loading,
            status: None,
            source_label: String::new(),
            theme,
        }
    }

    /// Record under the cursor, if the page has any rows.
    #[must_use]
    pub fn cursor_record(&self) -> Option<&Record> {
        self.table.page_records().get(self.cursor)
    }

    /// Moves the cursor down one row, wrapping to the top of the page.
    pub fn move_cursor_down(&mut self) -> bool {
        let len = self.table.page_records().len();
        if len == 0 {
            return false;
        }
        self.cursor = (self.cursor + 1) % len;
        true
    }

    /// Moves the cursor up one row, wrapping to the bottom of the page.
    pub fn move_cursor_up(&mut self) -> bool {
        let len = self.table.page_records().len();
        if len == 0 {
            return false;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
        true
    }

    /// Keeps the cursor on an existing row after the page shrank.
    pub fn clamp_cursor(&mut self) {
        let len = self.table.page_records().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Computes a renderable view model for a terminal of `rows` x `cols`.
    ///
    /// # Windowing Algorithm
    ///
    /// When the page holds more rows than fit between the chrome, a window of
    /// the page is shown, centered on the cursor and pushed back inside the page
    /// near its ends.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let snapshot = self.table.snapshot();
        let columns = ColumnLayout::for_width(cols);

        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);
        let page_len = snapshot.page.len();

        let mut visible_start = self.cursor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(page_len);
        if visible_end - visible_start < available_rows && page_len >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_rows = snapshot.page[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, record)| {
                self.compute_display_row(&snapshot, record, visible_start + offset)
            })
            .collect();

        UIViewModel {
            header: self.compute_header(&snapshot),
            search_bar: self.compute_search_bar(&snapshot),
            columns,
            rows: display_rows,
            all_checked: snapshot.page_fully_selected(),
            empty_state: self.compute_empty_state(&snapshot),
            pager: Self::compute_pager(&snapshot),
            footer: self.compute_footer(),
        }
    }

    fn compute_display_row(
        &self,
        snapshot: &TableSnapshot<'_>,
        record: &Record,
        page_index: usize,
    ) -> DisplayRow {
        let edit = snapshot.edit.filter(|edit| edit.target == record.id);
        let editing = match (edit, self.input_mode) {
            (Some(_), InputMode::Editing(field)) => Some(field),
            (Some(_), _) => Some(DraftField::Name),
            (None, _) => None,
        };

        let (name, email, role) = edit.map_or_else(
            || (record.name.clone(), record.email.clone(), record.role.label().to_string()),
            |edit| {
                (
                    edit.draft.name.clone(),
                    edit.draft.email.clone(),
                    edit.draft.role.label().to_string(),
                )
            },
        );

        let term = snapshot.filter_term;
        let name_highlights = if editing.is_none() { match_ranges(&name, term) } else { vec![] };
        let email_highlights = if editing.is_none() { match_ranges(&email, term) } else { vec![] };

        DisplayRow {
            id: record.id.to_string(),
            name,
            email,
            role,
            is_checked: snapshot.is_selected(&record.id),
            is_cursor: page_index == self.cursor,
            editing,
            name_highlights,
            email_highlights,
        }
    }

    fn compute_header(&self, snapshot: &TableSnapshot<'_>) -> HeaderInfo {
        let title = if self.source_label.is_empty() {
            format!("Admin Dashboard ({})", snapshot.total_count)
        } else {
            format!("Admin Dashboard ({}) · {}", snapshot.total_count, self.source_label)
        };
        let detail = match &self.load_status {
            LoadStatus::Loading => "loading...".to_string(),
            LoadStatus::Ready { loaded_at, .. } => format!("loaded {}", loaded_at.format("%H:%M:%S")),
            LoadStatus::Failed { .. } => "load failed".to_string(),
        };
        HeaderInfo { title, detail }
    }

    fn compute_search_bar(&self, snapshot: &TableSnapshot<'_>) -> SearchBarInfo {
        let is_active = self.input_mode == InputMode::Search;
        SearchBarInfo {
            query: if is_active {
                self.search_input.clone()
            } else {
                snapshot.filter_term.to_string()
            },
            is_active,
        }
    }

    fn compute_empty_state(&self, snapshot: &TableSnapshot<'_>) -> Option<EmptyState> {
        if !snapshot.page.is_empty() {
            return None;
        }

        let (message, subtitle) = match &self.load_status {
            LoadStatus::Loading => ("Loading records...".to_string(), self.source_label.clone()),
            LoadStatus::Failed { message } => (
                "Could not load records".to_string(),
                format!("{message} (press r to retry)"),
            ),
            LoadStatus::Ready { .. } if !snapshot.filter_term.is_empty() => (
                "No Users".to_string(),
                format!("Nothing matches \"{}\" (Esc clears the search)", snapshot.filter_term),
            ),
            LoadStatus::Ready { .. } => ("No Users".to_string(), "The list is empty".to_string()),
        };

        Some(EmptyState { message, subtitle })
    }

    fn compute_pager(snapshot: &TableSnapshot<'_>) -> PagerInfo {
        PagerInfo {
            summary: snapshot.summary(),
            current_page: snapshot.current_page,
            total_pages: snapshot.total_pages,
            pages: snapshot.page_numbers().collect(),
            page_size: snapshot.page_size.get(),
            selected_count: snapshot.selection.len(),
            has_previous: snapshot.has_previous_page(),
            has_next: snapshot.has_next_page(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "j/k: move  space: select  a: page  e: edit  d: delete  D: delete selected  /: search  n/p/g/G: pages  s: size  q: quit"
            }
            InputMode::Search => "Enter: apply  ESC: cancel  Type to filter",
            InputMode::Editing(DraftField::Role) => {
                "a/m or space: role  Tab: next field  Enter: save  ESC: cancel"
            }
            InputMode::Editing(_) => "Tab: next field  Enter: save  ESC: cancel  Type to edit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            status: self.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RecordId, Role};

    fn loaded(n: usize) -> AppState {
        let mut state = AppState::default();
        state.table.initialize(
            (1..=n)
                .map(|i| Record::new(i.to_string(), format!("user{i}"), format!("u{i}@x.com"), Role::Member))
                .collect(),
        );
        state.load_status = LoadStatus::Ready {
            count: n,
            loaded_at: chrono::Local::now(),
        };
        state
    }

    #[test]
    fn cursor_wraps_within_page() {
        let mut state = loaded(3);
        assert!(state.move_cursor_up());
        assert_eq!(state.cursor, 2);
        assert!(state.move_cursor_down());
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn viewmodel_windows_rows_around_cursor_on_short_terminals() {
        let mut state = loaded(20);
        state.table.set_page_size(PageSize::Twenty);
        state.cursor = 15;

        let vm = state.compute_viewmodel(16, 100);
        assert_eq!(vm.rows.len(), 5);
        assert!(vm.rows.iter().any(|r| r.is_cursor && r.id == "16"));
    }

    #[test]
    fn viewmodel_shows_draft_values_for_edited_row() {
        let mut state = loaded(2);
        state.table.begin_edit(&RecordId::from("2")).unwrap();
        state.table.update_draft_field(DraftField::Email, "new@x.com").unwrap();
        state.input_mode = InputMode::Editing(DraftField::Email);

        let vm = state.compute_viewmodel(30, 100);
        let row = vm.rows.iter().find(|r| r.id == "2").unwrap();
        assert_eq!(row.email, "new@x.com");
        assert_eq!(row.editing, Some(DraftField::Email));
    }

    #[test]
    fn empty_state_explains_failed_load() {
        let mut state = AppState::default();
        state.load_status = LoadStatus::Failed {
            message: "connection refused".to_string(),
        };
        let vm = state.compute_viewmodel(30, 100);
        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.message, "Could not load records");
        assert!(empty.subtitle.contains("connection refused"));
        assert_eq!(vm.pager.summary, "No Users");
    }

    #[test]
    fn header_counts_whole_collection_and_reports_load_state() {
        let mut state = loaded(12);
        state.table.search("user1");
        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(vm.header.title, "Admin Dashboard (12)");
        assert!(vm.header.detail.starts_with("loaded "));

        state.load_status = LoadStatus::Loading;
        assert_eq!(state.compute_viewmodel(30, 100).header.detail, "loading...");
    }

    #[test]
    fn pager_arrows_follow_page_position() {
        let mut state = loaded(25);
        let pager = state.compute_viewmodel(30, 100).pager;
        assert!(!pager.has_previous);
        assert!(pager.has_next);

        state.table.last_page();
        let pager = state.compute_viewmodel(30, 100).pager;
        assert!(pager.has_previous);
        assert!(!pager.has_next);
    }

    #[test]
    fn highlights_follow_applied_filter() {
        let mut state = loaded(12);
        state.table.search("user1");
        let vm = state.compute_viewmodel(30, 100);
        assert!(vm.rows.iter().all(|r| r.name_highlights == vec![(0, 5)]));
    }
}
