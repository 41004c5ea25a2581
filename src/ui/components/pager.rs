//! Pager component renderer.
//!
//! Renders the "Showing X to Y of Z entries" summary on the left and the page
//! buttons on the right, with the current page highlighted.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PagerInfo;

/// Most page buttons shown before the list is elided around the current page.
const MAX_BUTTONS: usize = 9;

/// Renders the pager line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
///  Showing 11 to 20 of 46 entries · 3 selected · 10/page     « ‹ 1 [2] 3 4 5 › »
/// ```
pub fn render_pager(row: usize, pager: &PagerInfo, theme: &Theme, cols: usize) -> usize {
    let mut left = format!(" {}", pager.summary);
    if pager.selected_count > 0 {
        left.push_str(&format!(" · {} selected", pager.selected_count));
    }
    left.push_str(&format!(" · {}/page", pager.page_size));

    let buttons = visible_pages(pager);
    let mut right_len = "« ‹ ".len() + " › » ".chars().count();
    for (i, page) in buttons.iter().enumerate() {
        if i > 0 {
            right_len += 1;
        }
        right_len += page.map_or(1, |p| p.to_string().len() + 2);
    }

    let left: String = left.chars().take(cols.saturating_sub(right_len)).collect();
    let left_len = left.chars().count();

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{left}");
    print!("{}", " ".repeat(cols.saturating_sub(left_len + right_len)));

    let arrows = |enabled: bool| {
        if enabled {
            Theme::fg(&theme.colors.text_normal)
        } else {
            Theme::fg(&theme.colors.border)
        }
    };

    print!("{}« ‹ ", arrows(pager.has_previous));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    for (i, page) in buttons.iter().enumerate() {
        if i > 0 {
            print!(" ");
        }
        match page {
            Some(p) if *p == pager.current_page => {
                print!("{}", Theme::fg(&theme.colors.pager_active_fg));
                print!("{}", Theme::bg(&theme.colors.pager_active_bg));
                print!(" {p} ");
                print!("{}", Theme::reset());
                print!("{}", Theme::fg(&theme.colors.text_dim));
            }
            Some(p) => print!(" {p} "),
            None => print!("…"),
        }
    }
    print!(" {}› » ", arrows(pager.has_next));
    print!("{}", Theme::reset());
    row + 1
}

/// Page buttons to draw; `None` marks an elided run.
fn visible_pages(pager: &PagerInfo) -> Vec<Option<usize>> {
    let total = pager.pages.len();
    if total <= MAX_BUTTONS {
        return pager.pages.iter().copied().map(Some).collect();
    }

    let current = pager.current_page.clamp(1, total);
    let start = current.saturating_sub(2).max(2);
    let end = (current + 2).min(total - 1);

    let mut out = vec![Some(1)];
    if start > 2 {
        out.push(None);
    }
    out.extend((start..=end).map(Some));
    if end < total - 1 {
        out.push(None);
    }
    out.push(Some(total));
    out
}
