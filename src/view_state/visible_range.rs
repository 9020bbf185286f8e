//! Visible range calculation

use super::height_index::HeightIndex;
use super::types::{FlatIndex, Offset, ViewportDimensions};

/// Range of flat items to materialize for the current viewport.
///
/// Computed via binary search on cumulative offsets.
///
/// # Invariants
/// - `start_index <= visible_start <= visible_end <= end_index`
/// - `end_index <= items.len()`
/// - Items in `visible_start..visible_end` intersect the viewport; the rest
///   of `start_index..end_index` is overscan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleRange {
    /// First materialized item (inclusive, overscan applied).
    pub start_index: FlatIndex,
    /// Last materialized item (exclusive, overscan applied).
    pub end_index: FlatIndex,
    /// First item intersecting the viewport (inclusive).
    pub visible_start: FlatIndex,
    /// End of the items intersecting the viewport (exclusive).
    pub visible_end: FlatIndex,
    /// Scroll offset the range was computed for.
    pub scroll_offset: Offset,
    /// Viewport height the range was computed for.
    pub viewport_height: u32,
}

impl VisibleRange {
    /// Create new visible range without overscan.
    ///
    /// # Panics
    /// In debug builds, panics if start_index > end_index.
    pub fn new(
        start_index: FlatIndex,
        end_index: FlatIndex,
        scroll_offset: Offset,
        viewport_height: u32,
    ) -> Self {
        debug_assert!(
            start_index <= end_index,
            "start_index {:?} > end_index {:?}",
            start_index,
            end_index
        );
        Self {
            start_index,
            end_index,
            visible_start: start_index,
            visible_end: end_index,
            scroll_offset,
            viewport_height,
        }
    }

    /// Empty range at the given scroll state.
    pub fn empty(scroll_offset: Offset, viewport_height: u32) -> Self {
        Self {
            scroll_offset,
            viewport_height,
            ..Self::default()
        }
    }

    /// Widen by `overscan` items on each side, clamped to `[0, len)`.
    pub fn with_overscan(mut self, overscan: usize, len: usize) -> Self {
        self.start_index = FlatIndex::new(self.visible_start.get().saturating_sub(overscan));
        self.end_index = FlatIndex::new(self.visible_end.get().saturating_add(overscan).min(len));
        self
    }

    /// Number of materialized items.
    pub fn len(&self) -> usize {
        self.end_index.get() - self.start_index.get()
    }

    /// Check if range is empty.
    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    /// Iterate over materialized indices.
    pub fn indices(&self) -> impl Iterator<Item = FlatIndex> {
        (self.start_index.get()..self.end_index.get()).map(FlatIndex::new)
    }

    /// Check if a specific index is materialized.
    pub fn contains(&self, index: FlatIndex) -> bool {
        self.start_index <= index && index < self.end_index
    }

    /// Check if a specific index intersects the viewport (ignores overscan).
    pub fn is_on_screen(&self, index: FlatIndex) -> bool {
        self.visible_start <= index && index < self.visible_end
    }
}

/// Compute the range of items to materialize. Pure.
///
/// `start` is the item at `scroll_offset` minus `overscan`; `end` walks forward
/// from that item while item tops are above the viewport bottom, then adds
/// `overscan`. Cost is O(log n) for the search plus O(k) for the walk.
///
/// A degenerate viewport (zero width or height) or an empty index yields an
/// empty range.
pub fn compute_visible_range(
    offsets: &HeightIndex,
    scroll_offset: Offset,
    viewport: ViewportDimensions,
    overscan: usize,
) -> VisibleRange {
    if viewport.is_degenerate() {
        return VisibleRange::empty(scroll_offset, viewport.height);
    }
    let Some(first) = offsets.index_at_offset(scroll_offset) else {
        return VisibleRange::empty(scroll_offset, viewport.height);
    };

    let viewport_bottom = scroll_offset.saturating_add(u64::from(viewport.height));
    let len = offsets.len();

    let mut end = first.get();
    let mut top = offsets.offset_of(first);
    while end < len && top < viewport_bottom {
        top = top.end_of(offsets.extent_at(FlatIndex::new(end)));
        end += 1;
    }

    VisibleRange::new(first, FlatIndex::new(end), scroll_offset, viewport.height)
        .with_overscan(overscan, len)
}
