//! Composable UI component renderers.
//!
//! Each component renders one part of the screen at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with record count and source
//! - [`search`]: Search input box
//! - [`table`]: Checkbox gutter plus NAME, EMAIL, ROLE columns
//! - [`empty`]: Empty state message for loading, failures, and no matches
//! - [`pager`]: Summary line and page buttons
//! - [`footer`]: Keybinding hints or the last status message
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Column Headers]
//! [Rows | Empty State]
//! [Blank padding to fill screen]
//! [Pager]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod pager;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use pager::render_pager;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full screen layout for a view model.
///
/// The pager, bottom border and footer are pinned to the last three rows; the
/// table fills the space between the column headers and the pager.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_table_headers(current_row, vm.all_checked, vm.columns, theme);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.rows, vm.columns, theme, cols);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let pager_row = border_row.saturating_sub(1);

    render_pager(pager_row, &vm.pager, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
