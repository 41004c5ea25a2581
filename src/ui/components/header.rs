//! Title bar: dashboard name and record count on the left, load status on the
//! right.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar across the full width and returns the next row.
///
/// The detail text is dropped first when the terminal is too narrow for both.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let detail_len = header.detail.chars().count();
    let show_detail = detail_len + 4 < cols.saturating_sub(header.title.chars().count());
    let title_width = if show_detail {
        cols.saturating_sub(detail_len + 2)
    } else {
        cols.saturating_sub(1)
    };

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!(" {}", Theme::bold());
    print!("{}", fit(&header.title, title_width));
    print!("{}", Theme::reset());

    if show_detail {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        if let Some(bg) = &theme.colors.header_bg {
            print!("{}", Theme::bg(bg));
        }
        print!("{} ", header.detail);
        print!("{}", Theme::reset());
    }
    row + 1
}
