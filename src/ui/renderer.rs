//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the screen layout in [`components`](super::components)
//!
//! Output goes to stdout through `print!`. The caller clears the screen before
//! and flushes after.

use crate::app::AppState;
use crate::ui::components;

/// Renders the console UI for a terminal of `rows` x `cols` to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_screen(&viewmodel, &state.theme, cols, rows);
}
