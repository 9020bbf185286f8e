//! Keyboard action handler for the transcript list.
//!
//! Pure functions that transform AppState in response to key actions.
//! Focus movement is handled here; everything that touches an item is routed
//! through the engine's `dispatch` so host callbacks fire.

use crate::model::KeyAction;
use crate::state::AppState;
use crate::view_state::{FlatIndex, ListInput};

/// Handle a list keyboard action.
///
/// `Quit` is the caller's concern and leaves the state unchanged.
pub fn handle_list_action(state: &mut AppState, action: KeyAction) {
    match action {
        KeyAction::FocusNext => move_focus(state, |current, _| current.next()),
        KeyAction::FocusPrev => move_focus(state, |current, _| current.prev()),
        KeyAction::FocusFirst => move_focus(state, |_, _| FlatIndex::new(0)),
        KeyAction::FocusLast => move_focus(state, |_, len| FlatIndex::new(len.saturating_sub(1))),
        KeyAction::PageDown => page(state, true),
        KeyAction::PageUp => page(state, false),
        KeyAction::Activate => dispatch_focused(state, ListInput::Activate),
        KeyAction::ToggleSelection => dispatch_focused(state, ListInput::ToggleSelection),
        KeyAction::ToggleGroupSelection => dispatch_focused(state, ListInput::ToggleGroupSelection),
        KeyAction::RequestDelete => dispatch_focused(state, ListInput::RequestDelete),
        KeyAction::ClearSelection => state.clear_selection(),
        KeyAction::Quit => {}
    }
}

/// Focus `step(current, len)`. With nothing focused yet, focus the first item.
fn move_focus<F>(state: &mut AppState, step: F)
where
    F: FnOnce(FlatIndex, usize) -> FlatIndex,
{
    let len = state.list().len();
    if len == 0 {
        return;
    }
    let target = match state.focused() {
        Some(current) => step(current, len),
        None => FlatIndex::new(0),
    };
    state.focus(target);
}

/// Move focus and scroll one viewport height.
fn page(state: &mut AppState, down: bool) {
    if state.list().is_empty() {
        return;
    }
    let height = u64::from(state.list().viewport().height.max(1));
    let current = state.focused().unwrap_or_default();

    let list = state.list_mut();
    let top = list.offset_of(current).unwrap_or_default();
    let target = if down {
        top.saturating_add(height)
    } else {
        top.saturating_sub(height)
    };
    let delta = if down { height as i64 } else { -(height as i64) };
    list.scroll_by(delta);

    if let Some(index) = list.index_at_offset(target) {
        state.focus(index);
    }
}

fn dispatch_focused(state: &mut AppState, input: fn(FlatIndex) -> ListInput) {
    if let Some(index) = state.focused() {
        state.dispatch(input(index));
    }
}

#[cfg(test)]
#[path = "list_handler_tests.rs"]
mod tests;
