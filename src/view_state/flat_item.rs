//! Flattening of the group -> row hierarchy into one addressable sequence.

use super::expansion::ExpansionTracker;
use crate::model::{Group, Transcript};

/// Kind of a flat item, as seen by size computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Header,
    Row,
}

/// One slot of the flattened sequence.
///
/// Stores positions into the caller's group slice rather than references, so the
/// sequence can live next to the `Arc` of groups it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlatItem {
    /// The header of `groups[group]`.
    Header { group: usize },
    /// `groups[group].records()[record]`.
    Row { group: usize, record: usize },
}

impl FlatItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Header { .. } => ItemKind::Header,
            Self::Row { .. } => ItemKind::Row,
        }
    }

    /// Position of the owning group.
    pub fn group(&self) -> usize {
        match *self {
            Self::Header { group } | Self::Row { group, .. } => group,
        }
    }

    /// Resolve against the groups this item was flattened from.
    ///
    /// Returns `None` if the positions no longer exist.
    pub fn resolve<'a>(&self, groups: &'a [Group]) -> Option<FlatItemRef<'a>> {
        match *self {
            Self::Header { group } => groups.get(group).map(FlatItemRef::Header),
            Self::Row { group, record } => {
                let owner = groups.get(group)?;
                let record = owner.records().get(record)?;
                Some(FlatItemRef::Row { record, owner })
            }
        }
    }
}

/// A flat item resolved to borrowed data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlatItemRef<'a> {
    Header(&'a Group),
    Row {
        record: &'a Transcript,
        owner: &'a Group,
    },
}

impl<'a> FlatItemRef<'a> {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Header(_) => ItemKind::Header,
            Self::Row { .. } => ItemKind::Row,
        }
    }

    /// Group that owns this item (the group itself for a header).
    pub fn owner(&self) -> &'a Group {
        match *self {
            Self::Header(group) => group,
            Self::Row { owner, .. } => owner,
        }
    }
}

/// Number of flat items `flatten` produces for these inputs.
pub fn flattened_len(groups: &[Group], expanded: &ExpansionTracker) -> usize {
    groups
        .iter()
        .map(|g| 1 + if expanded.is_expanded(g.title()) { g.len() } else { 0 })
        .sum()
}

/// Flatten groups into headers followed by the rows of expanded groups.
///
/// Pure: groups keep input order, rows keep record order, and a group with no
/// records still contributes its header.
pub fn flatten(groups: &[Group], expanded: &ExpansionTracker) -> Vec<FlatItem> {
    let mut items = Vec::with_capacity(flattened_len(groups, expanded));
    for (group_idx, group) in groups.iter().enumerate() {
        items.push(FlatItem::Header { group: group_idx });
        if expanded.is_expanded(group.title()) {
            items.extend((0..group.len()).map(|record| FlatItem::Row {
                group: group_idx,
                record,
            }));
        }
    }
    items
}

#[cfg(test)]
#[path = "flat_item_tests.rs"]
mod tests;
