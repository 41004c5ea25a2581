//! Empty state component renderer.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered two-line empty state message starting at `row`.
///
/// Shown while loading, after a failed load, and when the filter leaves
/// nothing to show.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message_style = format!("{}{}", Theme::fg(&theme.colors.empty_state_fg), Theme::bold());
    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));

    for (offset, (style, text)) in [(message_style, &empty.message), (subtitle_style, &empty.subtitle)]
        .iter()
        .enumerate()
    {
        position_cursor(row + offset, 1);
        print!("{style}{}{}", centered(text, cols), Theme::reset());
    }
}
