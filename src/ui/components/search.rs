//! Search bar component renderer.
//!
//! The box is always on screen. Its border lights up while it has keyboard
//! focus, and it shows a placeholder when no term is applied.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 2;

const PLACEHOLDER: &str = "Search by name, email or role";

/// Renders the 3-line search box at `row` and returns the row below it.
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let border = Theme::fg(if search.is_active {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    });
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let rule = "─".repeat(inner_width);

    let (text_color, text) = if search.query.is_empty() && !search.is_active {
        (&theme.colors.text_dim, format!(" {PLACEHOLDER}"))
    } else {
        let caret = if search.is_active { "▏" } else { "" };
        (&theme.colors.text_normal, format!(" Search: {}{caret}", search.query))
    };

    let lines = [
        format!("{border}┌{rule}┐"),
        format!("{border}│{}{}{border}│", Theme::fg(text_color), fit(&text, inner_width)),
        format!("{border}└{rule}┘"),
    ];
    for (offset, line) in lines.iter().enumerate() {
        position_cursor(row + offset, 1);
        print!("{margin}{line}{}", Theme::reset());
    }

    row + lines.len()
}
