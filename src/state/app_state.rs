//! Application state and transitions.
//!
//! AppState is the root state type of the terminal host. It owns the list
//! engine, the focused item and the effects of the engine's host callbacks.
//! All transitions are plain methods and handler functions testable without
//! a terminal.

use crate::model::{format_duration_ms, group_by_date, GroupTitle, Transcript, TranscriptId};
use crate::view_state::{
    FixedExtents, FlatIndex, GroupedListView, LayoutInvalidation, ListHost, ListInput,
    ViewportDimensions,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

// ===== HostEffects =====

/// Receives the list engine's callbacks and records what the UI should show.
#[derive(Debug, Clone, Default)]
pub struct HostEffects {
    /// One-line message for the status bar.
    status: Option<String>,
    /// Most recently opened record.
    opened: Option<TranscriptId>,
    /// Deletion asked for during the current dispatch, not yet applied.
    delete_request: Option<TranscriptId>,
    last_invalidation: Option<LayoutInvalidation>,
}

impl HostEffects {
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn opened(&self) -> Option<TranscriptId> {
        self.opened
    }

    pub fn last_invalidation(&self) -> Option<LayoutInvalidation> {
        self.last_invalidation
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    fn take_delete_request(&mut self) -> Option<TranscriptId> {
        self.delete_request.take()
    }
}

impl ListHost for HostEffects {
    fn on_toggle_group(&mut self, title: &GroupTitle) {
        debug!(title = %title, "host: group toggled");
    }

    fn on_toggle_selection(&mut self, id: TranscriptId) {
        debug!(id = %id, "host: selection toggled");
    }

    fn on_toggle_group_selection(&mut self, ids: &[TranscriptId]) {
        debug!(count = ids.len(), "host: group selection toggled");
        self.set_status(format!("Toggled {} transcripts", ids.len()));
    }

    fn on_activate_record(&mut self, record: &Transcript) {
        info!(id = %record.id(), "transcript opened");
        self.opened = Some(record.id());
        self.set_status(format!(
            "{} · {} · {}",
            record.id(),
            record.created_at().format("%Y-%m-%d %H:%M"),
            format_duration_ms(record.duration_ms())
        ));
    }

    fn on_request_delete(&mut self, id: TranscriptId, payload: &str) {
        info!(id = %id, "transcript delete requested");
        self.delete_request = Some(id);
        self.set_status(format!("Deleted {id}: {payload}"));
    }

    /// First line of the text.
    fn format_display_value(&self, record: &Transcript) -> String {
        record.text().lines().next().unwrap_or_default().trim().to_string()
    }

    fn on_layout_invalidated(&mut self, invalidation: LayoutInvalidation) {
        debug!(
            first_affected = invalidation.first_affected.get(),
            generation = invalidation.generation,
            "host: layout invalidated"
        );
        self.last_invalidation = Some(invalidation);
    }
}

// ===== AppState =====

/// Application state. Pure data, no terminal access.
///
/// # Invariants
/// - `focused`, when set, is a valid flat index of `list`
/// - the engine's groups are always `group_by_date(records, now)`
#[derive(Debug, Clone)]
pub struct AppState {
    list: GroupedListView,
    host: HostEffects,
    focused: Option<FlatIndex>,
    /// Reference time for date grouping, fixed for the session.
    now: DateTime<Utc>,
}

impl AppState {
    /// Group `transcripts` by date relative to `now`, all groups collapsed.
    ///
    /// Focus starts on the first item when there is one.
    pub fn new(transcripts: Vec<Transcript>, layout: FixedExtents, now: DateTime<Utc>) -> Self {
        let list = GroupedListView::new(group_by_date(transcripts, &now), layout);
        let focused = (!list.is_empty()).then(|| FlatIndex::new(0));
        Self {
            list,
            host: HostEffects::default(),
            focused,
            now,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.list.set_overscan(overscan);
        self
    }

    pub fn list(&self) -> &GroupedListView {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut GroupedListView {
        &mut self.list
    }

    pub fn host(&self) -> &HostEffects {
        &self.host
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn status(&self) -> Option<&str> {
        self.host.status()
    }

    pub fn focused(&self) -> Option<FlatIndex> {
        self.focused
    }

    /// Move focus to `index` (clamped) and scroll it into view.
    pub fn focus(&mut self, index: FlatIndex) {
        self.focused = index.clamp_to(self.list.len());
        if let Some(index) = self.focused {
            self.list.scroll_into_view(index);
        }
    }

    /// Total number of records across all groups.
    pub fn record_count(&self) -> usize {
        self.list.groups().iter().map(|g| g.len()).sum()
    }

    pub fn selected_count(&self) -> usize {
        self.list.selection().len()
    }

    /// Resize the list viewport. On an actual change, the focused item is
    /// scrolled back into view.
    pub fn set_viewport(&mut self, viewport: ViewportDimensions) {
        if self.list.viewport() == viewport {
            return;
        }
        self.list.set_viewport(viewport);
        if let Some(index) = self.focused {
            self.list.scroll_into_view(index);
        }
    }

    /// Route `input` through the engine, then apply any deletion it requested.
    pub fn dispatch(&mut self, input: ListInput) -> bool {
        let handled = self.list.dispatch(input, &mut self.host);
        if let Some(id) = self.host.take_delete_request() {
            self.delete_record(id);
        }
        self.clamp_focus();
        handled
    }

    pub fn clear_selection(&mut self) {
        if !self.list.selection().is_empty() {
            self.list.clear_selection();
            self.host.set_status("Selection cleared");
        }
    }

    /// Remove a record and regroup the rest.
    ///
    /// Returns false if no record has this id.
    pub fn delete_record(&mut self, id: TranscriptId) -> bool {
        let before = self.record_count();
        let remaining: Vec<Transcript> = self
            .list
            .groups()
            .iter()
            .flat_map(|g| g.records())
            .filter(|record| record.id() != id)
            .cloned()
            .collect();
        if remaining.len() == before {
            return false;
        }

        if self.list.is_selected(id) {
            self.list.toggle_selection(id);
        }
        if let Some(invalidation) = self.list.set_groups(group_by_date(remaining, &self.now)) {
            self.host.on_layout_invalidated(invalidation);
        }
        self.clamp_focus();
        info!(id = %id, remaining = before - 1, "transcript deleted");
        true
    }

    fn clamp_focus(&mut self) {
        let len = self.list.len();
        self.focused = self.focused.and_then(|index| index.clamp_to(len));
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
