//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);

        // Vim-style focus movement
        bindings.insert(plain(KeyCode::Char('j')), KeyAction::FocusNext);
        bindings.insert(plain(KeyCode::Char('k')), KeyAction::FocusPrev);
        bindings.insert(plain(KeyCode::Char('g')), KeyAction::FocusFirst);
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::FocusLast,
        );

        // Arrow keys
        bindings.insert(plain(KeyCode::Down), KeyAction::FocusNext);
        bindings.insert(plain(KeyCode::Up), KeyAction::FocusPrev);
        bindings.insert(plain(KeyCode::Home), KeyAction::FocusFirst);
        bindings.insert(plain(KeyCode::End), KeyAction::FocusLast);

        // Page navigation
        bindings.insert(plain(KeyCode::PageDown), KeyAction::PageDown);
        bindings.insert(plain(KeyCode::PageUp), KeyAction::PageUp);
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            KeyAction::PageUp,
        );

        // List interaction
        bindings.insert(plain(KeyCode::Enter), KeyAction::Activate);
        bindings.insert(plain(KeyCode::Char(' ')), KeyAction::ToggleSelection);
        bindings.insert(plain(KeyCode::Char('a')), KeyAction::ToggleGroupSelection);
        bindings.insert(plain(KeyCode::Char('d')), KeyAction::RequestDelete);
        bindings.insert(plain(KeyCode::Delete), KeyAction::RequestDelete);
        bindings.insert(plain(KeyCode::Esc), KeyAction::ClearSelection);

        // Application controls
        bindings.insert(plain(KeyCode::Char('q')), KeyAction::Quit);

        Self { bindings }
    }
}
