//! HeightIndex - cumulative offsets over flat items via a Fenwick tree
//!
//! Provides efficient operations for computing the top offset of any flat item
//! and for finding the item under a vertical position (scroll offset or pointer).
//!
//! # Complexity
//!
//! - `from_extents`: O(n log n)
//! - `set`: O(log n)
//! - `offset_of`: O(log n)
//! - `extent_at`: O(1)
//! - `index_at_offset`: O(log n)
//! - `lower_bound`: O(log n)
//! - `total`: O(1)
//! - `len`: O(1)

use super::types::{Extent, FlatIndex, Offset};

/// HeightIndex wraps a Fenwick tree for O(log n) prefix sum queries and updates.
///
/// Maintains cumulative extents for a sequence of flat items, supporting:
/// - Replacing individual item extents (measured heights)
/// - Computing the top offset of an item (sum of all preceding extents)
/// - Descending the tree for the item at a vertical offset
///
/// The index is sized once at construction. Structural changes to the item
/// sequence rebuild it from scratch rather than patching it.
#[derive(Debug, Clone, Default)]
pub struct HeightIndex {
    /// Fenwick tree backing storage (1-indexed internally, but we expose 0-indexed API).
    tree: Vec<isize>,
    /// Plain per-item extents, for O(1) lookup and delta computation.
    extents: Vec<Extent>,
    /// Sum of all extents.
    total: u64,
}

impl HeightIndex {
    /// Builds an index over the given extents.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tlv::view_state::height_index::HeightIndex;
    /// # use tlv::view_state::types::{Extent, FlatIndex, Offset};
    /// let index = HeightIndex::from_extents(&[Extent::new(3), Extent::new(4), Extent::new(5)]);
    /// assert_eq!(index.len(), 3);
    /// assert_eq!(index.offset_of(FlatIndex::new(2)), Offset::new(7));
    /// assert_eq!(index.total(), 12);
    /// ```
    pub fn from_extents(extents: &[Extent]) -> Self {
        let mut tree = vec![0isize; extents.len()];
        let mut total = 0u64;
        for (i, extent) in extents.iter().enumerate() {
            if !extent.is_zero() {
                fenwick::array::update(&mut tree, i, extent.get() as isize);
            }
            total += u64::from(extent.get());
        }
        Self {
            tree,
            extents: extents.to_vec(),
            total,
        }
    }

    /// Sets the extent at the given index.
    ///
    /// Computes the delta from the current extent and updates the Fenwick tree.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tlv::view_state::height_index::HeightIndex;
    /// # use tlv::view_state::types::{Extent, FlatIndex, Offset};
    /// let mut index = HeightIndex::from_extents(&[Extent::new(5), Extent::new(5)]);
    /// index.set(FlatIndex::new(0), Extent::new(10));
    /// assert_eq!(index.offset_of(FlatIndex::new(1)), Offset::new(10));
    /// ```
    pub fn set(&mut self, index: FlatIndex, extent: Extent) {
        let i = self.check(index);
        let current = self.extents[i];
        let delta = extent.get() as isize - current.get() as isize;
        if delta != 0 {
            fenwick::array::update(&mut self.tree, i, delta);
            self.total = self.total - u64::from(current.get()) + u64::from(extent.get());
            self.extents[i] = extent;
        }
    }

    /// Returns the extent stored for the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn extent_at(&self, index: FlatIndex) -> Extent {
        self.extents[self.check(index)]
    }

    /// Returns the cumulative extent up to and including the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn prefix_sum(&self, index: FlatIndex) -> u64 {
        let i = self.check(index);
        let sum = fenwick::array::prefix_sum(&self.tree, i);
        sum.max(0) as u64
    }

    /// Returns the top offset of the item: the sum of all preceding extents.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tlv::view_state::height_index::HeightIndex;
    /// # use tlv::view_state::types::{Extent, FlatIndex, Offset};
    /// let index = HeightIndex::from_extents(&[Extent::new(10), Extent::new(20)]);
    /// assert_eq!(index.offset_of(FlatIndex::new(0)), Offset::new(0));
    /// assert_eq!(index.offset_of(FlatIndex::new(1)), Offset::new(10));
    /// ```
    pub fn offset_of(&self, index: FlatIndex) -> Offset {
        self.check(index);
        match index.get() {
            0 => Offset::new(0),
            i => Offset::new(self.prefix_sum(FlatIndex::new(i - 1))),
        }
    }

    /// Greatest index whose top offset is `<= y`.
    ///
    /// For positive extents this is the item whose range `[top, top + extent)`
    /// contains `y`. Offsets past the end resolve to the last item.
    ///
    /// # Returns
    ///
    /// - `Some(index)` for any non-empty index
    /// - `None` if the index is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use tlv::view_state::height_index::HeightIndex;
    /// # use tlv::view_state::types::{Extent, FlatIndex, Offset};
    /// let index = HeightIndex::from_extents(&[Extent::new(10), Extent::new(20), Extent::new(15)]);
    /// assert_eq!(index.index_at_offset(Offset::new(0)), Some(FlatIndex::new(0)));
    /// assert_eq!(index.index_at_offset(Offset::new(10)), Some(FlatIndex::new(1)));
    /// assert_eq!(index.index_at_offset(Offset::new(29)), Some(FlatIndex::new(1)));
    /// assert_eq!(index.index_at_offset(Offset::new(100)), Some(FlatIndex::new(2)));
    /// ```
    pub fn index_at_offset(&self, y: Offset) -> Option<FlatIndex> {
        if self.is_empty() {
            return None;
        }
        let count = self.leading_count_within(y.get());
        Some(FlatIndex::new(count.min(self.len() - 1)))
    }

    /// The item whose extent strictly covers `y`.
    ///
    /// Unlike `index_at_offset`, returns `None` when `y >= total()`.
    pub fn lower_bound(&self, y: Offset) -> Option<FlatIndex> {
        if y.get() >= self.total {
            return None;
        }
        // Entry i covers [offset_of(i), offset_of(i) + extent_at(i)).
        let count = self.leading_count_within(y.get());
        (count < self.len()).then(|| FlatIndex::new(count))
    }

    /// Returns the total cumulative extent of all items.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the number of items in the index.
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    /// Returns true if the index contains no items.
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Largest `k` such that the first `k` extents sum to at most `y`.
    ///
    /// Walks the tree top-down in one pass. Zero-based node `p - 1` holds the
    /// sum of the `lowbit(p)` extents ending at item `p - 1`, so each step
    /// either takes a whole node or halves the stride.
    fn leading_count_within(&self, y: u64) -> usize {
        let len = self.tree.len();
        if len == 0 {
            return 0;
        }
        let mut pos = 0;
        let mut acc = 0u64;
        let mut step = 1usize << (usize::BITS - 1 - len.leading_zeros());
        while step > 0 {
            let next = pos + step;
            if next <= len {
                let node = self.tree[next - 1].max(0) as u64;
                if acc + node <= y {
                    pos = next;
                    acc += node;
                }
            }
            step >>= 1;
        }
        pos
    }

    fn check(&self, index: FlatIndex) -> usize {
        let i = index.get();
        assert!(
            i < self.len(),
            "index {} out of bounds (len: {})",
            i,
            self.len()
        );
        i
    }
}
