//! Date groups of transcripts.

use crate::model::{GroupTitle, Transcript, TranscriptId};

/// A titled, ordered run of transcripts.
///
/// # Invariants
/// - `title` is unique within one rendering pass (it keys expansion state)
/// - `start_index` is the position of the first record in the overall,
///   ungrouped record sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    title: GroupTitle,
    records: Vec<Transcript>,
    start_index: usize,
}

impl Group {
    pub fn new(title: GroupTitle, records: Vec<Transcript>, start_index: usize) -> Self {
        Self {
            title,
            records,
            start_index,
        }
    }

    pub fn title(&self) -> &GroupTitle {
        &self.title
    }

    pub fn records(&self) -> &[Transcript] {
        &self.records
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Number of records in the group.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids of all member records, in record order.
    pub fn record_ids(&self) -> Vec<TranscriptId> {
        self.records.iter().map(Transcript::id).collect()
    }
}
