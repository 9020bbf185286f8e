//! View-state layer - Flattening, sizing, windowing, and selection
//!
//! This module implements the virtualized grouped list engine: it turns date
//! groups into one addressable sequence, measures and offsets items, and maps
//! a scroll offset to the range of items worth rendering.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (Extent, Offset, FlatIndex, ViewportDimensions)
//! - `flat_item`: FlatItem - header/row sum type and the flattener
//! - `expansion`: ExpansionTracker - expanded group titles
//! - `selection`: SelectionTracker - selected record ids, group status
//! - `size_cache`: ItemSizer and the generation-stamped SizeCache
//! - `height_index`: HeightIndex - O(log n) prefix sums via Fenwick tree
//! - `visible_range`: VisibleRange and the pure windowing function
//! - `scroll`: ScrollPosition - semantic scroll position enum
//! - `hit_test`: HitTestResult - result of pointer hit-testing
//! - `host`: ListHost callbacks, ListInput, LayoutInvalidation
//! - `grouped_list`: GroupedListView - the engine facade

pub mod expansion;
pub mod flat_item;
pub mod grouped_list;
pub mod height_index;
pub mod host;
pub mod scroll;
pub mod selection;
pub mod size_cache;
pub mod types;
pub mod visible_range;

pub use expansion::ExpansionTracker;
pub use flat_item::{flatten, FlatItem, FlatItemRef, ItemKind};
pub use grouped_list::{CheckState, GroupedListView, ItemStyle, SliceEntry, VisibleSlice};
pub use height_index::HeightIndex;
pub use hit_test::HitTestResult;
pub use host::{LayoutInvalidation, ListHost, ListInput, NoopHost};
pub use scroll::ScrollPosition;
pub use selection::{BulkToggle, GroupSelectionStatus, SelectionTracker};
pub use size_cache::{FixedExtents, ItemSizer, SizeCache};
pub use types::{Extent, FlatIndex, Offset, ViewportDimensions};
pub use visible_range::{compute_visible_range, VisibleRange};
