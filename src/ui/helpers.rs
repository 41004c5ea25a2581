//! Shared rendering utilities and helpers.
//!
//! Low-level helpers used across UI components: cursor positioning, fitting
//! text into fixed-width cells, and search match highlighting with proper ANSI
//! escape sequence management.
//!
//! All helpers operate on character indices, not byte indices, so multi-byte
//! names and addresses line up in the table.
//!
//! # Example
//!
//! ```rust
//! use roster::ui::helpers::{fit, match_ranges};
//!
//! assert_eq!(match_ranges("Aaron Miles", "aa"), vec![(0, 2)]);
//! assert_eq!(fit("aaron@mail.com", 8), "aaron@m…");
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Finds every non-overlapping, case-insensitive occurrence of `term` in `text`.
///
/// Returns `(start, end)` character ranges, end exclusive. An empty term
/// matches nothing.
#[must_use]
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = term.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return vec![];
    }

    // Lowercasing may change char counts (e.g. 'İ'); fall back to no highlight then.
    let hay: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
    if hay.len() != text.chars().count() {
        return vec![];
    }

    let mut ranges = vec![];
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        if hay[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Truncates or pads `text` to exactly `width` characters.
///
/// Truncated text ends in an ellipsis.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text}{}", " ".repeat(width - len));
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Centers `text` in a line of exactly `cols` characters, clipping it if needed.
#[must_use]
pub fn centered(text: &str, cols: usize) -> String {
    let clipped: String = text.chars().take(cols).collect();
    let len = clipped.chars().count();
    let left = cols.saturating_sub(len) / 2;
    format!("{:left$}{clipped:<width$}", "", width = cols - left)
}

/// Renders `text` fitted to `width`, highlighting the given character ranges.
///
/// Highlighting is skipped on the cursor row so it does not fight the cursor
/// colors; after each highlight the cursor colors are restored.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    width: usize,
    theme: &Theme,
    is_cursor: bool,
) {
    let fitted = fit(text, width);
    if ranges.is_empty() || is_cursor {
        print!("{fitted}");
        return;
    }

    let chars: Vec<char> = fitted.chars().collect();
    let len = text.chars().count();
    // Characters of the original text still on screen (the ellipsis is not).
    let visible = if len <= width { len } else { width.saturating_sub(1) };
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let end = end.min(visible);
        if start >= end || start < current_pos {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    let remaining: String = chars[current_pos..].iter().collect();
    print!("{remaining}");
}
