//! Boundary between the list engine and whatever renders it.

use super::types::FlatIndex;
use crate::model::{GroupTitle, Transcript, TranscriptId};

/// Emitted after any structural change (new groups, expand/collapse).
///
/// Every size or offset the host derived for indices at or after
/// `first_affected` is stale; `generation` is the engine's new cache
/// generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInvalidation {
    pub first_affected: FlatIndex,
    pub generation: u64,
}

/// Discrete input routed to the engine by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListInput {
    /// Primary action: expand/collapse on a header, open on a row.
    Activate(FlatIndex),
    /// Row: flip its selection. Header: bulk toggle its group.
    ToggleSelection(FlatIndex),
    /// Bulk toggle the group owning the item.
    ToggleGroupSelection(FlatIndex),
    /// Ask the host to delete the row's record.
    RequestDelete(FlatIndex),
    /// Pointer press at a viewport-relative y; activates the item under it.
    Click { y: u32 },
}

/// Collaborator callbacks the engine invokes in response to input.
///
/// Every method defaults to a no-op so hosts override only what they handle.
pub trait ListHost {
    /// A group was expanded or collapsed.
    fn on_toggle_group(&mut self, _title: &GroupTitle) {}

    /// A single record's selection flipped.
    fn on_toggle_selection(&mut self, _id: TranscriptId) {}

    /// A group's records were bulk toggled as one transition.
    fn on_toggle_group_selection(&mut self, _ids: &[TranscriptId]) {}

    /// A row was activated.
    fn on_activate_record(&mut self, _record: &Transcript) {}

    /// A row asked to be deleted. `payload` is the record's display value.
    fn on_request_delete(&mut self, _id: TranscriptId, _payload: &str) {}

    /// Display value for a record.
    fn format_display_value(&self, record: &Transcript) -> String {
        record.text().to_string()
    }

    /// Structural change made earlier layout assumptions stale.
    fn on_layout_invalidated(&mut self, _invalidation: LayoutInvalidation) {}
}

/// Host that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl ListHost for NoopHost {}
