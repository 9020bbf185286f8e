//! Test fixtures and the acceptance test harness for TUI testing.
//!
//! Provides deterministic transcript/group builders for unit tests and a
//! high-level API wrapping TuiApp<TestBackend> for simulating user
//! interactions.

use crate::config::keybindings::KeyBindings;
use crate::model::{Group, GroupTitle, Transcript, TranscriptId};
use crate::state::AppState;
use crate::view::TuiApp;
use crate::view_state::FixedExtents;
use chrono::{DateTime, Duration, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Reference "now" shared by every fixture: 2026-10-14 12:00 UTC.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap()
}

/// Groups with the given titles and record counts.
///
/// Ids run from 1 across all groups in order, text is `"transcript {id}"`,
/// every record carries the same timestamp, and `start_index` is cumulative.
pub fn sample_groups(spec: &[(&str, usize)]) -> Vec<Group> {
    let mut next_id = 1;
    let mut start_index = 0;
    spec.iter()
        .map(|&(title, count)| {
            let records = (0..count)
                .map(|_| {
                    let id = next_id;
                    next_id += 1;
                    Transcript::new(TranscriptId::new(id), format!("transcript {id}"), 1_500, test_now())
                })
                .collect();
            let group = Group::new(GroupTitle::new(title).unwrap(), records, start_index);
            start_index += count;
            group
        })
        .collect()
}

/// Transcripts aged relative to [`test_now`]: `count` records `days_ago` days
/// back for each pair, one minute apart.
///
/// Ids run from 1 in input order; text is `"transcript {id}"`.
pub fn transcripts_by_age(spec: &[(i64, usize)]) -> Vec<Transcript> {
    let mut next_id = 1;
    let mut transcripts = Vec::new();
    for &(days_ago, count) in spec {
        for minute in 0..count {
            let created_at = test_now() - Duration::days(days_ago) - Duration::minutes(minute as i64);
            transcripts.push(Transcript::new(
                TranscriptId::new(next_id),
                format!("transcript {next_id}"),
                65_000,
                created_at,
            ));
            next_id += 1;
        }
    }
    transcripts
}

/// AppState over [`transcripts_by_age`] with the default layout.
pub fn app_state_by_age(spec: &[(i64, usize)]) -> AppState {
    AppState::new(transcripts_by_age(spec), FixedExtents::default(), test_now())
}

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Harness over `state` with an 80x24 terminal.
    pub fn new(state: AppState) -> Self {
        Self::with_size(state, 80, 24)
    }

    /// Harness over `state` with a custom terminal size.
    pub fn with_size(state: AppState, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let app = TuiApp::new_for_test(terminal, state, KeyBindings::default());
        Self { app, running: true }
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping early on quit.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Send a left click at terminal cell (`column`, `row`).
    ///
    /// Renders first so the list area is known.
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    /// Send one wheel notch down (`down`) or up at terminal cell (`column`, `row`).
    pub fn wheel_at(&mut self, column: u16, row: u16, down: bool) {
        let kind = if down {
            MouseEventKind::ScrollDown
        } else {
            MouseEventKind::ScrollUp
        };
        self.mouse(kind, column, row);
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return;
        }
        let _ = self.app.render_test();
        self.app.handle_mouse_test(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }
}
