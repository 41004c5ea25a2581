//! Path utilities for config, state, and data locations.
//!
//! Locations follow the XDG base directory layout, falling back to the
//! conventional dot-directories under `$HOME` when the XDG variables are unset:
//!
//! - config: `$XDG_CONFIG_HOME/roster` or `~/.config/roster`
//! - state (logs): `$XDG_STATE_HOME/roster` or `~/.local/state/roster`

use std::path::PathBuf;

const APP_DIR: &str = "roster";

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

fn xdg_dir(var: &str, fallback: &[&str]) -> Option<PathBuf> {
    let base = std::env::var_os(var)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir().map(|home| fallback.iter().fold(home, |p, part| p.join(part))))?;
    Some(base.join(APP_DIR))
}

/// Returns the configuration directory, if a home directory is known.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

/// Returns the default configuration file path (`config.toml` in [`config_dir`]).
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Returns the state directory holding the log file.
#[must_use]
pub fn state_dir() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", &[".local", "state"])
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading tilde, and all paths when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use roster::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path").to_str(), Some("/absolute/path"));
/// assert_eq!(expand_tilde("relative/members.json").to_str(), Some("relative/members.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
