//! Footer component renderer.
//!
//! Shows the status line from the last command when there is one, otherwise
//! the keybinding hints for the current mode.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer at `row` and returns the next row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let (text, color) = footer.status.as_deref().map_or(
        (footer.keybindings.as_str(), &theme.colors.text_dim),
        |status| (status, &theme.colors.status_fg),
    );

    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), centered(text, cols), Theme::reset());
    row + 1
}
