//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the console, supporting both
//! built-in themes and custom themes loaded from TOML files. It provides
//! utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `slate`: Dark theme with cool blues (default)
//! - `paper`: Light theme for bright terminals
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e2e8f0"
//! cursor_fg = "#0f172a"
//! cursor_bg = "#7dd3fc"
//! text_normal = "#cbd5e1"
//! text_dim = "#64748b"
//! border = "#334155"
//! search_bar_border = "#7dd3fc"
//! match_highlight_fg = "#0f172a"
//! match_highlight_bg = "#fde68a"
//! empty_state_fg = "#93c5fd"
//! checked_fg = "#4ade80"
//! admin_fg = "#f472b6"
//! edit_fg = "#0f172a"
//! edit_bg = "#a5b4fc"
//! pager_active_fg = "#0f172a"
//! pager_active_bg = "#7dd3fc"
//! status_fg = "#fbbf24"
//! ```
//!
//! # Example
//!
//! ```rust
//! use roster::ui::theme::Theme;
//!
//! let theme = Theme::from_name("paper").unwrap();
//! print!("{}", Theme::fg(&theme.colors.header_fg));
//! print!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 2] = ["slate", "paper"];

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#e2e8f0").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Cursor row foreground color.
    pub cursor_fg: String,
    /// Cursor row background color.
    pub cursor_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Ticked checkbox color.
    pub checked_fg: String,
    /// Role cell color for admins.
    pub admin_fg: String,

    /// Focused draft cell foreground.
    pub edit_fg: String,
    /// Focused draft cell background.
    pub edit_bg: String,

    /// Current page button foreground.
    pub pager_active_fg: String,
    /// Current page button background.
    pub pager_active_bg: String,

    /// Status line color.
    pub status_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of [`BUILTIN_THEMES`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "slate" => include_str!("../../themes/slate.toml"),
            "paper" => include_str!("../../themes/paper.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| RosterError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| RosterError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Parses `#rrggbb` (the `#` is optional) into its channels.
    fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        let [_, r, g, b] = value.to_be_bytes();
        Some((r, g, b))
    }

    /// 24-bit SGR sequence; `layer` is 38 for foreground, 48 for background.
    /// Unparseable colors render as white.
    fn sgr(layer: u8, hex: &str) -> String {
        let (r, g, b) = Self::parse_hex(hex).unwrap_or((255, 255, 255));
        format!("\u{001b}[{layer};2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use roster::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        Self::sgr(38, hex)
    }

    #[must_use]
    pub fn bg(hex: &str) -> String {
        Self::sgr(48, hex)
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Palette used if the embedded default theme fails to parse.
    fn fallback() -> Self {
        let c = |hex: &str| hex.to_string();
        Self {
            name: "slate".to_string(),
            colors: ThemeColors {
                header_fg: c("#e2e8f0"),
                header_bg: None,
                cursor_fg: c("#0f172a"),
                cursor_bg: c("#7dd3fc"),
                text_normal: c("#cbd5e1"),
                text_dim: c("#64748b"),
                border: c("#334155"),
                search_bar_border: c("#7dd3fc"),
                match_highlight_fg: c("#0f172a"),
                match_highlight_bg: c("#fde68a"),
                empty_state_fg: c("#93c5fd"),
                checked_fg: c("#4ade80"),
                admin_fg: c("#f472b6"),
                edit_fg: c("#0f172a"),
                edit_bg: c("#a5b4fc"),
                pager_active_fg: c("#0f172a"),
                pager_active_bg: c("#7dd3fc"),
                status_fg: c("#fbbf24"),
            },
        }
    }
}

impl Default for Theme {
    /// Returns the default theme (`slate`).
    fn default() -> Self {
        Self::from_name("slate").unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn embedded_default_matches_fallback_palette() {
        assert_eq!(Theme::default(), Theme::fallback());
    }

    #[test]
    fn unknown_theme_is_none() {
        assert!(Theme::from_name("catppuccin").is_none());
    }

    #[test]
    fn bad_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#12345g"), "\u{1b}[48;2;255;255;255m");
        assert_eq!(Theme::bg("1e293b"), "\u{1b}[48;2;30;41;59m");
    }

    #[test]
    fn from_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "name = ").unwrap();
        assert!(matches!(Theme::from_file(&path), Err(RosterError::Theme(_))));
    }
}
