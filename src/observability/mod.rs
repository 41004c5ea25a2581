//! File-based logging for the console.
//!
//! `tracing` spans and events from every layer are formatted by a
//! `tracing-subscriber` fmt layer and written to a size-rotated log file,
//! since stdout belongs to the terminal UI.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → roster.log (+3 backups)
//! ```
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `log_level` in the config file or `--log-level`
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::{FileWriter, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::{env_filter, init_tracing, LOG_FILE_NAME};
