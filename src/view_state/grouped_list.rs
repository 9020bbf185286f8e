//! Virtualized view over date groups of transcripts.
//!
//! `GroupedListView` owns expansion, selection, the size cache and the offset
//! table. Groups are shared read-only with the caller through an `Arc`; handing
//! in a different `Arc` is a structural change, handing in the same one is not.
//!
//! Derived state is rebuilt lazily: structural changes only reflatten and bump
//! the generation, and the offset table is rebuilt on the next query that
//! needs it. Queries that may rebuild therefore take `&mut self`.

use std::sync::Arc;

use tracing::{debug, trace};

use super::expansion::ExpansionTracker;
use super::flat_item::{flatten, FlatItem, FlatItemRef, ItemKind};
use super::height_index::HeightIndex;
use super::hit_test::HitTestResult;
use super::host::{LayoutInvalidation, ListHost, ListInput};
use super::scroll::ScrollPosition;
use super::selection::{BulkToggle, GroupSelectionStatus, SelectionTracker};
use super::size_cache::{FixedExtents, ItemSizer, SizeCache};
use super::types::{Extent, FlatIndex, Offset, ViewportDimensions};
use super::visible_range::{compute_visible_range, VisibleRange};
use crate::model::{Group, GroupTitle, Transcript, TranscriptId};

/// Items rendered beyond each viewport edge unless configured otherwise.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Checkbox state of a rendered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Partial,
    Checked,
}

impl From<GroupSelectionStatus> for CheckState {
    fn from(status: GroupSelectionStatus) -> Self {
        match status {
            GroupSelectionStatus::None => Self::Unchecked,
            GroupSelectionStatus::Some => Self::Partial,
            GroupSelectionStatus::All => Self::Checked,
        }
    }
}

impl From<bool> for CheckState {
    fn from(selected: bool) -> Self {
        if selected {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }
}

/// Placement and annotations for one materialized item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStyle {
    /// Top edge in content coordinates.
    pub top: Offset,
    /// Top edge relative to the viewport; negative when partly scrolled off.
    pub viewport_top: i64,
    pub extent: Extent,
    pub check: CheckState,
    /// Headers: whether the group is expanded. Rows: always true.
    pub expanded: bool,
    /// False for overscan items.
    pub on_screen: bool,
}

/// One materialized item of a `VisibleSlice`.
#[derive(Debug, Clone, Copy)]
pub struct SliceEntry<'a> {
    pub index: FlatIndex,
    pub item: FlatItemRef<'a>,
    pub style: ItemStyle,
}

/// Collected output of one frame.
#[derive(Debug, Clone)]
pub struct VisibleSlice<'a> {
    pub range: VisibleRange,
    pub entries: Vec<SliceEntry<'a>>,
}

/// The list engine.
#[derive(Debug, Clone)]
pub struct GroupedListView<S = FixedExtents> {
    groups: Arc<[Group]>,
    expansion: ExpansionTracker,
    selection: SelectionTracker,
    items: Vec<FlatItem>,
    /// Flat index of each group's header, by group position.
    headers: Vec<FlatIndex>,
    generation: u64,
    sizer: S,
    sizes: SizeCache,
    offsets: HeightIndex,
    /// Generation `offsets` was built for.
    offsets_generation: Option<u64>,
    scroll: ScrollPosition,
    viewport: ViewportDimensions,
    overscan: usize,
}

impl<S: ItemSizer> GroupedListView<S> {
    /// Create a view with every group collapsed and nothing selected.
    pub fn new(groups: impl Into<Arc<[Group]>>, sizer: S) -> Self {
        let mut view = Self {
            groups: groups.into(),
            expansion: ExpansionTracker::new(),
            selection: SelectionTracker::new(),
            items: Vec::new(),
            headers: Vec::new(),
            generation: 0,
            sizer,
            sizes: SizeCache::new(),
            offsets: HeightIndex::default(),
            offsets_generation: None,
            scroll: ScrollPosition::Top,
            viewport: ViewportDimensions::default(),
            overscan: DEFAULT_OVERSCAN,
        };
        view.invalidate(0);
        view
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_viewport(mut self, viewport: ViewportDimensions) -> Self {
        self.viewport = viewport;
        self
    }

    // ===== Structure =====

    pub fn groups(&self) -> &Arc<[Group]> {
        &self.groups
    }

    /// Replace the groups.
    ///
    /// Returns `None` when `groups` is the `Arc` already held. Expansion and
    /// selection survive; titles or ids that no longer exist are simply inert.
    pub fn set_groups(&mut self, groups: impl Into<Arc<[Group]>>) -> Option<LayoutInvalidation> {
        let groups = groups.into();
        if Arc::ptr_eq(&groups, &self.groups) {
            return None;
        }
        let first_changed = first_changed_group(&self.groups, &groups);
        self.groups = groups;
        Some(self.invalidate(first_changed))
    }

    /// Expand or collapse a group.
    pub fn toggle_group(&mut self, title: &GroupTitle) -> LayoutInvalidation {
        let expanded = self.expansion.toggle(title);
        let position = self.group_position(title).unwrap_or(self.groups.len());
        debug!(title = %title, expanded, "group toggled");
        self.invalidate(position)
    }

    pub fn is_expanded(&self, title: &GroupTitle) -> bool {
        self.expansion.is_expanded(title)
    }

    pub fn expansion(&self) -> &ExpansionTracker {
        &self.expansion
    }

    /// Number of flat items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current cache generation; advances on every structural change.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn flat_items(&self) -> &[FlatItem] {
        &self.items
    }

    /// Item at `index`, or `None` for "nothing to render at this slot".
    pub fn item(&self, index: FlatIndex) -> Option<FlatItemRef<'_>> {
        self.items.get(index.get())?.resolve(&self.groups)
    }

    /// Flat index of a group's header.
    pub fn header_index(&self, title: &GroupTitle) -> Option<FlatIndex> {
        self.group_position(title)
            .and_then(|g| self.headers.get(g).copied())
    }

    // ===== Sizes and offsets =====

    /// Extent of the item at `index`, memoized for the current generation.
    pub fn size_of(&mut self, index: FlatIndex) -> Option<Extent> {
        let len = self.items.len();
        let generation = self.generation;
        let item = self.items.get(index.get())?.resolve(&self.groups)?;
        let sizer = &self.sizer;
        Some(
            self.sizes
                .get_or_insert_with(generation, len, index, || sizer.extent_of(index, item)),
        )
    }

    /// Replace the extent at `index` with a measured one.
    ///
    /// Holds until the next structural change. Returns false if out of range.
    pub fn set_measured_extent(&mut self, index: FlatIndex, extent: Extent) -> bool {
        let len = self.items.len();
        if index.get() >= len {
            return false;
        }
        self.sizes.insert(self.generation, len, index, extent);
        if self.offsets_generation == Some(self.generation) {
            self.offsets.set(index, extent);
        }
        true
    }

    /// Top offset of the item at `index`.
    pub fn offset_of(&mut self, index: FlatIndex) -> Option<Offset> {
        self.ensure_offsets();
        (index.get() < self.offsets.len()).then(|| self.offsets.offset_of(index))
    }

    /// Greatest index whose offset is `<= y`; offsets past the end map to the
    /// last item. `None` only when the list is empty.
    pub fn index_at_offset(&mut self, y: Offset) -> Option<FlatIndex> {
        self.ensure_offsets();
        self.offsets.index_at_offset(y)
    }

    /// Sum of every item's extent.
    pub fn total_extent(&mut self) -> u64 {
        self.ensure_offsets();
        self.offsets.total()
    }

    // ===== Viewport and scrolling =====

    pub fn viewport(&self) -> ViewportDimensions {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: ViewportDimensions) {
        self.viewport = viewport;
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }

    pub fn scroll(&self) -> ScrollPosition {
        self.scroll
    }

    pub fn scroll_to(&mut self, position: ScrollPosition) {
        self.scroll = position;
    }

    /// Current scroll position resolved against the layout.
    pub fn scroll_offset(&mut self) -> Offset {
        self.ensure_offsets();
        let offsets = &self.offsets;
        self.scroll.resolve(offsets.total(), self.viewport.height, |index| {
            (index.get() < offsets.len()).then(|| offsets.offset_of(index))
        })
    }

    /// Scroll by a signed amount. Returns the new resolved offset.
    pub fn scroll_by(&mut self, delta: i64) -> Offset {
        let current = self.scroll_offset();
        let target = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta.unsigned_abs())
        };
        self.scroll = ScrollPosition::AtOffset(target);
        let resolved = self.scroll_offset();
        self.scroll = ScrollPosition::AtOffset(resolved);
        resolved
    }

    /// Scroll the minimum amount that brings `index` fully into view (or its
    /// top, if it is taller than the viewport). Returns true if scrolled.
    pub fn scroll_into_view(&mut self, index: FlatIndex) -> bool {
        let Some(top) = self.offset_of(index) else {
            return false;
        };
        let extent = self.offsets.extent_at(index);
        let bottom = top.end_of(extent);
        let height = u64::from(self.viewport.height);
        let current = self.scroll_offset();

        let target = if top < current || extent.get() as u64 >= height {
            top
        } else if bottom.get() > current.get() + height {
            Offset::new(bottom.get() - height)
        } else {
            return false;
        };
        self.scroll = ScrollPosition::AtOffset(target);
        target != current
    }

    // ===== Windowing =====

    /// Range of items to materialize for the current scroll and viewport.
    pub fn visible_range(&mut self) -> VisibleRange {
        let scroll = self.scroll_offset();
        let range = compute_visible_range(&self.offsets, scroll, self.viewport, self.overscan);
        trace!(
            scroll = scroll.get(),
            start = range.start_index.get(),
            end = range.end_index.get(),
            "visible range"
        );
        range
    }

    /// Hand each materialized item to `render`, in index order.
    ///
    /// Slots whose item no longer resolves are skipped.
    pub fn render_visible<F>(&mut self, mut render: F) -> VisibleRange
    where
        F: FnMut(FlatIndex, FlatItemRef<'_>, ItemStyle),
    {
        let range = self.visible_range();
        for index in range.indices() {
            if let Some(item) = self.item(index) {
                render(index, item, self.style_for(index, item, &range));
            }
        }
        range
    }

    /// Collect the materialized items of the current frame.
    pub fn visible_slice(&mut self) -> VisibleSlice<'_> {
        let range = self.visible_range();
        let entries = range
            .indices()
            .filter_map(|index| {
                let item = self.item(index)?;
                Some(SliceEntry {
                    index,
                    item,
                    style: self.style_for(index, item, &range),
                })
            })
            .collect();
        VisibleSlice { range, entries }
    }

    /// Item under a viewport-relative y.
    pub fn hit_test(&mut self, viewport_y: u32) -> HitTestResult {
        if viewport_y >= self.viewport.height {
            return HitTestResult::miss();
        }
        let absolute = self.scroll_offset().saturating_add(u64::from(viewport_y));
        let Some(index) = self.offsets.lower_bound(absolute) else {
            return HitTestResult::miss();
        };
        let Some(item) = self.item(index) else {
            return HitTestResult::miss();
        };
        let within = absolute.get() - self.offsets.offset_of(index).get();
        HitTestResult::hit(index, item.kind(), within as u32)
    }

    // ===== Selection =====

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn is_selected(&self, id: TranscriptId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn toggle_selection(&mut self, id: TranscriptId) -> bool {
        self.selection.toggle_one(id)
    }

    /// Select-all / clear for one group. Unknown titles change nothing.
    pub fn toggle_group_selection(&mut self, title: &GroupTitle) -> BulkToggle {
        match self.group_position(title) {
            Some(g) => {
                let ids = self.groups[g].record_ids();
                self.selection.toggle_many(&ids)
            }
            None => BulkToggle::Unchanged,
        }
    }

    pub fn group_selection_status(&self, title: &GroupTitle) -> GroupSelectionStatus {
        self.group_position(title)
            .map_or(GroupSelectionStatus::None, |g| {
                self.status_of_group(&self.groups[g])
            })
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ===== Input =====

    /// Apply a host input and notify `host` of what happened.
    ///
    /// Returns false when the input did not land on an item that accepts it.
    pub fn dispatch<H>(&mut self, input: ListInput, host: &mut H) -> bool
    where
        H: ListHost + ?Sized,
    {
        trace!(?input, "dispatch");
        let groups = Arc::clone(&self.groups);
        match input {
            ListInput::Activate(index) => self.activate(&groups, index, host),
            ListInput::Click { y } => match self.hit_test(y).index() {
                Some(index) => self.activate(&groups, index, host),
                None => false,
            },
            ListInput::ToggleSelection(index) => match self.resolve_in(&groups, index) {
                Some(FlatItemRef::Row { record, .. }) => {
                    self.selection.toggle_one(record.id());
                    host.on_toggle_selection(record.id());
                    true
                }
                Some(FlatItemRef::Header(group)) => self.bulk_toggle(group, host),
                None => false,
            },
            ListInput::ToggleGroupSelection(index) => match self.resolve_in(&groups, index) {
                Some(item) => self.bulk_toggle(item.owner(), host),
                None => false,
            },
            ListInput::RequestDelete(index) => match self.resolve_in(&groups, index) {
                Some(FlatItemRef::Row { record, .. }) => {
                    let payload = host.format_display_value(record);
                    host.on_request_delete(record.id(), &payload);
                    true
                }
                _ => false,
            },
        }
    }

    fn activate<H>(&mut self, groups: &[Group], index: FlatIndex, host: &mut H) -> bool
    where
        H: ListHost + ?Sized,
    {
        match self.resolve_in(groups, index) {
            Some(FlatItemRef::Header(group)) => {
                let invalidation = self.toggle_group(group.title());
                host.on_toggle_group(group.title());
                host.on_layout_invalidated(invalidation);
                true
            }
            Some(FlatItemRef::Row { record, .. }) => {
                host.on_activate_record(record);
                true
            }
            None => false,
        }
    }

    fn bulk_toggle<H>(&mut self, group: &Group, host: &mut H) -> bool
    where
        H: ListHost + ?Sized,
    {
        let ids = group.record_ids();
        if self.selection.toggle_many(&ids) != BulkToggle::Unchanged {
            host.on_toggle_group_selection(&ids);
        }
        true
    }

    // ===== Internals =====

    fn resolve_in<'g>(&self, groups: &'g [Group], index: FlatIndex) -> Option<FlatItemRef<'g>> {
        self.items.get(index.get())?.resolve(groups)
    }

    fn group_position(&self, title: &GroupTitle) -> Option<usize> {
        self.groups.iter().position(|g| g.title() == title)
    }

    /// Reflatten and start a new generation.
    fn invalidate(&mut self, first_changed_group: usize) -> LayoutInvalidation {
        self.items = flatten(&self.groups, &self.expansion);
        self.headers = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.kind() == ItemKind::Header)
            .map(|(i, _)| FlatIndex::new(i))
            .collect();
        self.generation += 1;
        self.offsets_generation = None;

        let first_affected = self
            .headers
            .get(first_changed_group)
            .copied()
            .unwrap_or(FlatIndex::new(self.items.len()));
        debug!(
            generation = self.generation,
            first_affected = first_affected.get(),
            items = self.items.len(),
            "layout invalidated"
        );
        LayoutInvalidation {
            first_affected,
            generation: self.generation,
        }
    }

    fn ensure_offsets(&mut self) {
        if self.offsets_generation == Some(self.generation) {
            return;
        }
        let len = self.items.len();
        let generation = self.generation;
        let sizer = &self.sizer;
        let mut extents = Vec::with_capacity(len);
        for (i, flat) in self.items.iter().enumerate() {
            let index = FlatIndex::new(i);
            let extent = match flat.resolve(&self.groups) {
                Some(item) => self
                    .sizes
                    .get_or_insert_with(generation, len, index, || sizer.extent_of(index, item)),
                None => Extent::ZERO,
            };
            extents.push(extent);
        }
        self.offsets = HeightIndex::from_extents(&extents);
        self.offsets_generation = Some(generation);
        debug!(generation, items = len, total = self.offsets.total(), "offset table rebuilt");
    }

    fn status_of_group(&self, group: &Group) -> GroupSelectionStatus {
        self.selection
            .status_of(group.records().iter().map(Transcript::id))
    }

    fn style_for(&self, index: FlatIndex, item: FlatItemRef<'_>, range: &VisibleRange) -> ItemStyle {
        let top = self.offsets.offset_of(index);
        let (check, expanded) = match item {
            FlatItemRef::Header(group) => (
                self.status_of_group(group).into(),
                self.expansion.is_expanded(group.title()),
            ),
            FlatItemRef::Row { record, .. } => (self.selection.is_selected(record.id()).into(), true),
        };
        ItemStyle {
            top,
            viewport_top: top.get() as i64 - range.scroll_offset.get() as i64,
            extent: self.offsets.extent_at(index),
            check,
            expanded,
            on_screen: range.is_on_screen(index),
        }
    }
}

/// Position of the first group that differs, or the shorter length.
fn first_changed_group(old: &[Group], new: &[Group]) -> usize {
    old.iter()
        .zip(new)
        .position(|(a, b)| a != b)
        .unwrap_or(old.len().min(new.len()))
}

#[cfg(test)]
#[path = "grouped_list_tests.rs"]
mod tests;
