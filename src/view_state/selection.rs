//! Multi-select state over transcript rows.

use crate::model::TranscriptId;
use std::collections::HashSet;

/// Derived selection status of a group's checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupSelectionStatus {
    /// No member selected (also used for groups with no members).
    None,
    /// At least one member selected, at least one not.
    Some,
    /// Every member selected.
    All,
}

/// What a bulk toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkToggle {
    /// Missing members were added; the whole set is now selected.
    SelectedAll,
    /// Every member was already selected and has been removed.
    Cleared,
    /// The id set was empty.
    Unchanged,
}

/// Set of selected record ids.
///
/// Mutated only by explicit toggles and by `clear`; the list engine never
/// drops selections on its own, including for rows hidden by a collapsed
/// group. `revision` advances exactly once per mutating call so observers see
/// a bulk toggle as a single transition.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    selected: HashSet<TranscriptId>,
    revision: u64,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one id. Returns the new selected state.
    pub fn toggle_one(&mut self, id: TranscriptId) -> bool {
        let now_selected = if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        };
        self.revision += 1;
        now_selected
    }

    /// Select-all / clear for a group's ids, applied as one transition.
    ///
    /// If every id is already selected they are all removed; otherwise every
    /// missing id is added. A single unselected member is enough for select-all
    /// to win.
    pub fn toggle_many(&mut self, ids: &[TranscriptId]) -> BulkToggle {
        if ids.is_empty() {
            return BulkToggle::Unchanged;
        }

        let outcome = if ids.iter().all(|id| self.selected.contains(id)) {
            for id in ids {
                self.selected.remove(id);
            }
            BulkToggle::Cleared
        } else {
            self.selected.extend(ids.iter().copied());
            BulkToggle::SelectedAll
        };
        self.revision += 1;
        outcome
    }

    pub fn is_selected(&self, id: TranscriptId) -> bool {
        self.selected.contains(&id)
    }

    /// Status of a group with the given member ids. Pure.
    pub fn group_selection_status(&self, ids: &[TranscriptId]) -> GroupSelectionStatus {
        self.status_of(ids.iter().copied())
    }

    /// Single pass over `ids`; nothing is collected.
    pub fn status_of<I>(&self, ids: I) -> GroupSelectionStatus
    where
        I: IntoIterator<Item = TranscriptId>,
    {
        let (total, selected) = ids.into_iter().fold((0usize, 0usize), |(total, selected), id| {
            (total + 1, selected + usize::from(self.selected.contains(&id)))
        });
        match selected {
            0 => GroupSelectionStatus::None,
            n if n == total => GroupSelectionStatus::All,
            _ => GroupSelectionStatus::Some,
        }
    }

    /// Forget every selection ("exit selection mode").
    pub fn clear(&mut self) {
        if !self.selected.is_empty() {
            self.selected.clear();
            self.revision += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn selected_ids(&self) -> Vec<TranscriptId> {
        let mut ids: Vec<_> = self.selected.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Count of mutations applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
