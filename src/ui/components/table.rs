//! Table component renderer.
//!
//! Renders the record page as a table with a checkbox gutter and NAME, EMAIL
//! and ROLE columns. Supports cursor highlighting, search match highlighting,
//! and inline edit cells.

use crate::domain::DraftField;
use crate::ui::helpers::{self, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnLayout, DisplayRow};

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Renders the column headers with the page checkbox at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Example
///
/// ```text
///   [ ]  NAME            EMAIL                     ROLE
/// ```
pub fn render_table_headers(
    row: usize,
    all_checked: bool,
    columns: ColumnLayout,
    theme: &Theme,
) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("  ");
    if all_checked {
        print!("{}", Theme::fg(&theme.colors.checked_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.header_fg));
    }
    print!("{}", checkbox(all_checked));
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("  ");
    print!("{} ", fit("NAME", columns.name));
    print!("{} ", fit("EMAIL", columns.email));
    print!("{}", fit("ROLE", columns.role));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all display rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_table_rows(
    row: usize,
    rows: &[DisplayRow],
    columns: ColumnLayout,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in rows {
        current_row = render_table_row(current_row, item, columns, theme, cols);
    }
    current_row
}

/// Renders a single record row.
///
/// # Styling Precedence
///
/// 1. Focused draft cell (if the row is being edited)
/// 2. Cursor background (if `is_cursor`)
/// 3. Search match highlights (unless on the cursor row)
/// 4. Normal text color
///
/// The row is padded to the full terminal width so the cursor background
/// covers the whole line.
fn render_table_row(
    row: usize,
    item: &DisplayRow,
    columns: ColumnLayout,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);
    let base = || {
        if item.is_cursor {
            print!("{}", Theme::fg(&theme.colors.cursor_fg));
            print!("{}", Theme::bg(&theme.colors.cursor_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    };

    base();
    print!("{}", if item.is_cursor { "› " } else { "  " });
    if item.is_checked && !item.is_cursor {
        print!("{}", Theme::fg(&theme.colors.checked_fg));
    }
    print!("{}", checkbox(item.is_checked));
    base();
    print!("  ");

    let cell = |field: DraftField, text: &str, width: usize, highlights: &[(usize, usize)]| {
        if item.editing == Some(field) {
            print!("{}", Theme::fg(&theme.colors.edit_fg));
            print!("{}", Theme::bg(&theme.colors.edit_bg));
            print!("{}", fit(text, width));
            print!("{}", Theme::reset());
            base();
        } else if item.editing.is_some() {
            print!("{}", Theme::bold());
            print!("{}", fit(text, width));
            print!("{}", Theme::reset());
            base();
        } else {
            helpers::render_highlighted_text(text, highlights, width, theme, item.is_cursor);
        }
        print!(" ");
    };

    cell(DraftField::Name, &item.name, columns.name, &item.name_highlights);
    cell(DraftField::Email, &item.email, columns.email, &item.email_highlights);

    if item.editing.is_none() && !item.is_cursor && item.role == "Admin" {
        print!("{}", Theme::fg(&theme.colors.admin_fg));
        print!("{}", fit(&item.role, columns.role));
        base();
    } else if item.editing == Some(DraftField::Role) {
        print!("{}", Theme::fg(&theme.colors.edit_fg));
        print!("{}", Theme::bg(&theme.colors.edit_bg));
        print!("{}", fit(&item.role, columns.role));
        print!("{}", Theme::reset());
        base();
    } else {
        print!("{}", fit(&item.role, columns.role));
    }

    let line_len = ColumnLayout::GUTTER + columns.name + columns.email + columns.role + 2;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
