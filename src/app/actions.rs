//! Actions representing side effects to be executed by the shell runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. Actions
//! are the boundary between pure state transitions and effectful work such as
//! leaving the terminal or asking the loader thread for data.
//!
//! # Example
//!
//! ```rust
//! use roster::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::default();
//! handle_event(&mut state, &Event::LoadFailed { error: "timed out".to_string() })?;
//! let (_render, actions) = handle_event(&mut state, &Event::Reload)?;
//! assert_eq!(actions, vec![Action::Fetch]);
//! # Ok::<(), roster::RosterError>(())
//! ```

/// Commands executed by the shell runtime after an event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Restore the terminal and exit.
    Quit,

    /// Fetch the dataset from the configured source on the loader thread.
    ///
    /// The result arrives later as `Event::RecordsLoaded` or `Event::LoadFailed`.
    Fetch,
}
