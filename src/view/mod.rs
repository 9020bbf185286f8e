//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod list;
pub mod status_bar;
pub mod styles;

pub use list::{list_lines, truncate_to_width, wrap_to_width};
pub use status_bar::status_line;
pub use styles::{ColorConfig, ListStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::state::{handle_click, handle_list_action, handle_wheel, AppState, ClickZone};
use crate::view::constants::{CHECKBOX_COLUMNS, STATUS_BAR_HEIGHT};
use crate::view_state::ViewportDimensions;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::layout::{Position, Rect};
use ratatui::widgets::Paragraph;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: ListStyles,
    /// Last rendered list area (for click and wheel mapping)
    last_list_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(app_state: AppState, styles: ListStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            KeyBindings::default(),
            styles,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on terminal events and
    /// redraws only after one arrives, so an idle list costs nothing.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        styles: ListStyles,
    ) -> Self {
        let mut app = Self {
            terminal,
            app_state,
            key_bindings,
            styles,
            last_list_area: None,
        };
        if let Ok(size) = app.terminal.size() {
            app.sync_viewport(size.width, size.height);
        }
        app
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(KeyEvent::new(key.code, key.modifiers)) else {
            return false;
        };
        debug!(?action, "key action");
        if action == KeyAction::Quit {
            return true;
        }
        handle_list_action(&mut self.app_state, action);
        false
    }

    /// Route clicks and wheel events that land inside the list area.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(area) = self.last_list_area else {
            return;
        };
        if !area.contains(Position::new(mouse.column, mouse.row)) {
            return;
        }
        let viewport_y = u32::from(mouse.row - area.y);
        let column = mouse.column - area.x;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let zone = if CHECKBOX_COLUMNS.contains(&column) {
                    ClickZone::Checkbox
                } else {
                    ClickZone::Body
                };
                handle_click(&mut self.app_state, viewport_y, zone);
            }
            MouseEventKind::ScrollDown => handle_wheel(&mut self.app_state, 1),
            MouseEventKind::ScrollUp => handle_wheel(&mut self.app_state, -1),
            _ => {}
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        self.sync_viewport(width, height);
    }

    fn sync_viewport(&mut self, width: u16, height: u16) {
        let area = list_area(Rect::new(0, 0, width, height));
        self.app_state.set_viewport(ViewportDimensions::new(
            u32::from(area.width),
            u32::from(area.height),
        ));
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        self.sync_viewport(size.width, size.height);

        let list_area = list_area(frame_area);
        let status_area = Rect::new(
            0,
            list_area.bottom(),
            frame_area.width,
            frame_area.height - list_area.height,
        );
        self.last_list_area = Some(list_area);

        let lines = list_lines(&mut self.app_state, &self.styles);
        let status = status_line(&self.app_state, usize::from(status_area.width));
        let status_style = self.styles.status_bar();

        self.terminal.draw(|frame| {
            frame.render_widget(Paragraph::new(lines), list_area);
            frame.render_widget(Paragraph::new(status).style(status_style), status_area);
        })?;

        Ok(())
    }
}

/// Everything above the status bar.
fn list_area(frame_area: Rect) -> Rect {
    Rect::new(
        frame_area.x,
        frame_area.y,
        frame_area.width,
        frame_area.height.saturating_sub(STATUS_BAR_HEIGHT),
    )
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
//
// DO NOT use these in production code.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// This allows tests to construct TuiApp directly without going through
    /// terminal initialization. Used by acceptance test harness. Colors are
    /// disabled so snapshots do not depend on `NO_COLOR`.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
    ) -> Self {
        Self::with_terminal(
            terminal,
            app_state,
            key_bindings,
            ListStyles::with_color_config(ColorConfig::disabled()),
        )
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a single mouse event (test-only accessor)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application over `app_state`
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(app_state: AppState, colors: ColorConfig) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, ListStyles::with_color_config(colors))?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
