//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod list_handler;
pub mod mouse_handler;

// Re-export for convenience
pub use app_state::{AppState, HostEffects};
pub use list_handler::handle_list_action;
pub use mouse_handler::{handle_click, handle_wheel, ClickZone};
