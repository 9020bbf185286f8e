//! Expanded/collapsed state of date groups.

use crate::model::GroupTitle;
use std::collections::HashSet;

/// Set of expanded group titles.
///
/// Every title starts `Collapsed`; `toggle` is the only transition. State is
/// keyed by title, so it survives regrouping as long as the title recurs, and
/// is never reset implicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionTracker {
    expanded: HashSet<GroupTitle>,
}

impl ExpansionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the state of `title`. Returns the new expanded state.
    pub fn toggle(&mut self, title: &GroupTitle) -> bool {
        if self.expanded.remove(title) {
            false
        } else {
            self.expanded.insert(title.clone());
            true
        }
    }

    pub fn is_expanded(&self, title: &GroupTitle) -> bool {
        self.expanded.contains(title)
    }

    /// Number of expanded titles (including titles not present in the current groups).
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

impl FromIterator<GroupTitle> for ExpansionTracker {
    fn from_iter<I: IntoIterator<Item = GroupTitle>>(iter: I) -> Self {
        Self {
            expanded: iter.into_iter().collect(),
        }
    }
}
