//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Focus movement
    /// Move focus to the next flat item. Default: j/↓
    FocusNext,
    /// Move focus to the previous flat item. Default: k/↑
    FocusPrev,
    /// Move focus down by one viewport. Default: Ctrl+d/Page Down
    PageDown,
    /// Move focus up by one viewport. Default: Ctrl+u/Page Up
    PageUp,
    /// Jump to the first item. Default: g/Home
    FocusFirst,
    /// Jump to the last item. Default: G/End
    FocusLast,

    // Item interaction
    /// Expand/collapse the focused group, or open the focused row. Default: Enter
    Activate,
    /// Toggle selection of the focused row (or its whole group on a header). Default: Space
    ToggleSelection,
    /// Select/clear every row of the focused item's group. Default: a
    ToggleGroupSelection,
    /// Ask for deletion of the focused row. Default: d/Delete
    RequestDelete,
    /// Leave selection mode, clearing all selected rows. Default: Esc
    ClearSelection,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
