//! Application layer coordinating the record table, events, and actions.
//!
//! This module holds the record table controller and the interactive shell
//! logic built on top of it. It sits between the terminal runtime (main.rs)
//! and the domain/source/worker layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key Input → Events → Event Handler → RecordTable ops → Actions → Side Effects
//!                          ↑                                  ↓
//!                          └────────── Loader Responses ──────┘
//! ```
//!
//! # Modules
//!
//! - [`table`]: The record table controller (search, paging, selection, edit, delete)
//! - [`snapshot`]: Read-only views handed to renderers and listeners
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and load status types
//! - [`state`]: Shell state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use roster::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (_render, actions) = handle_event(&mut state, &Event::NextPage)?;
//! assert!(actions.is_empty());
//! # Ok::<(), roster::RosterError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod snapshot;
pub mod state;
pub mod table;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, LoadStatus};
pub use snapshot::TableSnapshot;
pub use state::AppState;
pub use table::{EditState, Listener, PageSize, RecordTable};
