//! Mouse event handler.
//!
//! Pure functions that transform AppState in response to mouse events.
//! Coordinates are relative to the list viewport; the caller maps terminal
//! cells into it.

use crate::state::AppState;
use crate::view_state::ListInput;

/// Lines scrolled per wheel notch.
pub const WHEEL_STEP: i64 = 3;

/// Part of an item a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickZone {
    /// The `[ ]` box: toggles selection.
    Checkbox,
    /// Anywhere else: activates the item.
    Body,
}

/// Handle a left click at viewport row `viewport_y`.
///
/// Toggles the selection of the item under the pointer or activates it,
/// depending on `zone`, then focuses it. Returns false on a miss.
pub fn handle_click(state: &mut AppState, viewport_y: u32, zone: ClickZone) -> bool {
    let Some(index) = state.list_mut().hit_test(viewport_y).index() else {
        return false;
    };
    // Focusing may scroll, so the click resolves first.
    let handled = match zone {
        ClickZone::Checkbox => state.dispatch(ListInput::ToggleSelection(index)),
        ClickZone::Body => state.dispatch(ListInput::Click { y: viewport_y }),
    };
    state.focus(index);
    handled
}

/// Scroll by `notches` wheel steps (negative is up). Focus does not move.
pub fn handle_wheel(state: &mut AppState, notches: i64) {
    state.list_mut().scroll_by(notches * WHEEL_STEP);
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
