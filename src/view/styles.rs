//! List item styling configuration.
//!
//! Provides distinct styles for headers, rows, selected rows and the focused
//! item, and honors `NO_COLOR`.

use crate::view_state::{CheckState, ItemKind};
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ListStyles =====

/// Styles for list lines and the status bar.
///
/// Focus is always shown (reversed video) so it stays visible without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStyles {
    header: Style,
    row: Style,
    selected: Style,
    status_bar: Style,
}

impl ListStyles {
    /// Create ListStyles with the default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// If colors are disabled, only modifiers are applied.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                header: bold.fg(Color::Cyan),
                row: Style::default(),
                selected: Style::default().fg(Color::Yellow),
                status_bar: Style::default().fg(Color::Black).bg(Color::Gray),
            }
        } else {
            Self {
                header: bold,
                row: Style::default(),
                selected: bold,
                status_bar: Style::default(),
            }
        }
    }

    /// Style for every line of one item.
    pub fn item_style(&self, kind: ItemKind, check: CheckState, focused: bool) -> Style {
        let base = match (kind, check) {
            (ItemKind::Header, _) => self.header,
            (ItemKind::Row, CheckState::Checked) => self.selected,
            (ItemKind::Row, _) => self.row,
        };
        if focused {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }

    pub fn status_bar(&self) -> Style {
        self.status_bar
    }
}

impl Default for ListStyles {
    fn default() -> Self {
        Self::new()
    }
}
