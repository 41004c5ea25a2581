//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` from a table
//! snapshot and consumed by the renderer. They carry no business logic, only
//! display-ready data: cell text, highlight ranges, checkbox state and the
//! pager summary.
//!
//! # Example
//!
//! ```rust
//! use roster::ui::viewmodel::{ColumnLayout, EmptyState};
//!
//! let columns = ColumnLayout::for_width(100);
//! assert!(columns.name + columns.email + columns.role < 100);
//!
//! let empty = EmptyState {
//!     message: "No Users".to_string(),
//!     subtitle: "The list is empty".to_string(),
//! };
//! assert_eq!(empty.message, "No Users");
//! ```

use crate::domain::DraftField;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Search box contents.
    pub search_bar: SearchBarInfo,

    /// Column widths for the current terminal width.
    pub columns: ColumnLayout,

    /// Rows of the current page that fit on screen.
    pub rows: Vec<DisplayRow>,

    /// Whether the header checkbox is ticked (every row on the page selected).
    pub all_checked: bool,

    /// Message shown instead of rows when the page is empty.
    pub empty_state: Option<EmptyState>,

    /// Summary line and page buttons.
    pub pager: PagerInfo,

    /// Keybinding hints and status line.
    pub footer: FooterInfo,
}

/// Display information for one record row.
#[derive(Debug, Clone)]
pub struct DisplayRow {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Role label ("Member" or "Admin").
    pub role: String,

    /// Whether the row's checkbox is ticked.
    pub is_checked: bool,

    /// Whether the keyboard cursor is on this row.
    pub is_cursor: bool,

    /// Focused draft field if this row is being edited. Cells show draft values.
    pub editing: Option<DraftField>,

    /// Character ranges of the name matching the filter term.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub name_highlights: Vec<(usize, usize)>,

    /// Character ranges of the email matching the filter term.
    pub email_highlights: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    /// Load status shown at the right edge ("loaded 14:02", "loading...").
    pub detail: String,
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Typed text while searching, otherwise the applied filter term.
    pub query: String,

    /// Whether the search box has keyboard focus.
    pub is_active: bool,
}

/// Column widths in terminal cells, excluding the checkbox gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: usize,
    pub email: usize,
    pub role: usize,
}

impl ColumnLayout {
    /// Width of the cursor marker and checkbox column.
    pub const GUTTER: usize = 7;

    const ROLE: usize = 8;
    const MIN_TEXT: usize = 8;

    /// Splits the terminal width between the name and email columns.
    ///
    /// Email gets the larger share since addresses run longer than names.
    #[must_use]
    pub fn for_width(cols: usize) -> Self {
        let text = cols
            .saturating_sub(Self::GUTTER + Self::ROLE + 4)
            .max(Self::MIN_TEXT * 2);
        let name = (text * 2 / 5).max(Self::MIN_TEXT);
        let email = text.saturating_sub(name).max(Self::MIN_TEXT);

        Self {
            name,
            email,
            role: Self::ROLE,
        }
    }
}

/// Message shown when the current page has no rows.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No Users").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Pager display information.
#[derive(Debug, Clone)]
pub struct PagerInfo {
    /// "Showing X to Y of Z entries", or "No Users".
    pub summary: String,
    pub current_page: usize,
    pub total_pages: usize,
    /// Page buttons, 1-based.
    pub pages: Vec<usize>,
    pub page_size: usize,
    pub selected_count: usize,
    /// Whether the first/previous buttons lead anywhere.
    pub has_previous: bool,
    /// Whether the next/last buttons lead anywhere.
    pub has_next: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help for the current input mode.
    pub keybindings: String,

    /// Result of the last command, if any.
    pub status: Option<String>,
}
