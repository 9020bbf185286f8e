//! Per-item extent computation and its generation-stamped memo.
//!
//! The cache is keyed by flat index, not item identity. Any structural change
//! (new groups, expand/collapse) shifts indices, so the owner bumps its
//! generation and every entry computed under an older generation is treated
//! as absent. Invariant: `cache.generation == current generation`, or the
//! cache is empty.

use super::flat_item::{FlatItemRef, ItemKind};
use super::types::{Extent, FlatIndex};

/// Computes the extent of a flat item.
///
/// Implementations may measure variable content; the cache never assumes
/// that two items of the same kind share an extent.
pub trait ItemSizer {
    fn extent_of(&self, index: FlatIndex, item: FlatItemRef<'_>) -> Extent;
}

impl<F> ItemSizer for F
where
    F: Fn(FlatIndex, FlatItemRef<'_>) -> Extent,
{
    fn extent_of(&self, index: FlatIndex, item: FlatItemRef<'_>) -> Extent {
        self(index, item)
    }
}

/// One extent for every header and another for every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedExtents {
    pub header: Extent,
    pub row: Extent,
}

impl FixedExtents {
    pub fn new(header: u32, row: u32) -> Self {
        Self {
            header: Extent::new(header),
            row: Extent::new(row),
        }
    }

    /// Same extent for both kinds.
    pub fn uniform(extent: u32) -> Self {
        Self::new(extent, extent)
    }

    pub fn for_kind(&self, kind: ItemKind) -> Extent {
        match kind {
            ItemKind::Header => self.header,
            ItemKind::Row => self.row,
        }
    }
}

impl Default for FixedExtents {
    fn default() -> Self {
        Self::new(1, 2)
    }
}

impl ItemSizer for FixedExtents {
    fn extent_of(&self, _index: FlatIndex, item: FlatItemRef<'_>) -> Extent {
        self.for_kind(item.kind())
    }
}

/// Memo of extents by flat index, valid for exactly one generation.
#[derive(Debug, Clone, Default)]
pub struct SizeCache {
    generation: u64,
    entries: Vec<Option<Extent>>,
}

impl SizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation the current entries belong to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Memoized extent at `index`, computing and storing it on first access.
    ///
    /// A stale generation empties the cache first and re-sizes it to `len`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get_or_insert_with<F>(
        &mut self,
        generation: u64,
        len: usize,
        index: FlatIndex,
        compute: F,
    ) -> Extent
    where
        F: FnOnce() -> Extent,
    {
        assert!(
            index.get() < len,
            "index {} out of bounds (len: {})",
            index.get(),
            len
        );
        self.sync(generation, len);
        *self.entries[index.get()].get_or_insert_with(compute)
    }

    /// Store a measured extent for `index` under `generation`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn insert(&mut self, generation: u64, len: usize, index: FlatIndex, extent: Extent) {
        assert!(
            index.get() < len,
            "index {} out of bounds (len: {})",
            index.get(),
            len
        );
        self.sync(generation, len);
        self.entries[index.get()] = Some(extent);
    }

    fn sync(&mut self, generation: u64, len: usize) {
        if self.generation != generation || self.entries.len() != len {
            self.generation = generation;
            self.entries.clear();
            self.entries.resize(len, None);
        }
    }
}
