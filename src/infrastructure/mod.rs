//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where configuration and logs live and expands `~` in user-supplied
//! paths.

pub mod paths;

pub use paths::{config_dir, default_config_path, expand_tilde, state_dir};
