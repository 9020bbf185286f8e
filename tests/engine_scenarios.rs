//! End-to-end behavior of the grouped list engine through its public API.

use chrono::{DateTime, TimeZone, Utc};
use tlv::model::{Group, GroupTitle, Transcript, TranscriptId};
use tlv::view_state::{
    Extent, FixedExtents, FlatIndex, FlatItemRef, GroupSelectionStatus, GroupedListView,
    ItemKind, LayoutInvalidation, ListHost, ListInput, NoopHost, Offset, ScrollPosition,
    ViewportDimensions,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap()
}

fn title(raw: &str) -> GroupTitle {
    GroupTitle::new(raw).expect("valid title")
}

/// Groups with sequential ids across the whole sequence.
fn groups(spec: &[(&str, usize)]) -> Vec<Group> {
    let mut next_id = 1;
    let mut start = 0;
    spec.iter()
        .map(|(name, count)| {
            let records = (0..*count)
                .map(|i| Transcript::new(TranscriptId::new(next_id + i as i64), "note", 1000, now()))
                .collect();
            let group = Group::new(title(name), records, start);
            next_id += *count as i64;
            start += count;
            group
        })
        .collect()
}

/// Today: 5, Yesterday: 0, Last Week: 12.
fn three_groups(sizer: FixedExtents) -> GroupedListView {
    GroupedListView::new(groups(&[("Today", 5), ("Yesterday", 0), ("Last Week", 12)]), sizer)
}

#[derive(Default)]
struct Recorder {
    invalidations: Vec<LayoutInvalidation>,
    bulk: Vec<Vec<TranscriptId>>,
    opened: Vec<TranscriptId>,
    deletes: Vec<(TranscriptId, String)>,
}

impl ListHost for Recorder {
    fn on_toggle_group_selection(&mut self, ids: &[TranscriptId]) {
        self.bulk.push(ids.to_vec());
    }

    fn on_activate_record(&mut self, record: &Transcript) {
        self.opened.push(record.id());
    }

    fn on_request_delete(&mut self, id: TranscriptId, payload: &str) {
        self.deletes.push((id, payload.to_string()));
    }

    fn format_display_value(&self, record: &Transcript) -> String {
        format!("#{} {}", record.id().get(), record.text())
    }

    fn on_layout_invalidated(&mut self, invalidation: LayoutInvalidation) {
        self.invalidations.push(invalidation);
    }
}

#[test]
fn collapsed_groups_flatten_to_headers_only() {
    let view = three_groups(FixedExtents::uniform(48));

    assert_eq!(view.len(), 3);
    for i in 0..3 {
        assert_eq!(view.item(FlatIndex::new(i)).map(|item| item.kind()), Some(ItemKind::Header));
    }
}

#[test]
fn expanding_today_inserts_its_rows_after_the_header() {
    let mut view = three_groups(FixedExtents::uniform(48));
    view.toggle_group(&title("Today"));

    assert_eq!(view.len(), 8);
    for i in 1..=5 {
        match view.item(FlatIndex::new(i)) {
            Some(FlatItemRef::Row { owner, .. }) => assert_eq!(owner.title(), &title("Today")),
            other => panic!("expected a Today row at {i}, got {other:?}"),
        }
    }
    assert_eq!(view.header_index(&title("Yesterday")), Some(FlatIndex::new(6)));
}

#[test]
fn uniform_extents_window_the_first_nine_items() {
    let mut view = three_groups(FixedExtents::uniform(48))
        .with_viewport(ViewportDimensions::new(320, 400))
        .with_overscan(0);
    view.toggle_group(&title("Today"));
    view.toggle_group(&title("Last Week"));

    let range = view.visible_range();

    assert_eq!(range.start_index, FlatIndex::new(0));
    assert_eq!(range.end_index, FlatIndex::new(9));
}

#[test]
fn overscan_widens_the_window_past_the_viewport() {
    let mut view = three_groups(FixedExtents::uniform(48))
        .with_viewport(ViewportDimensions::new(320, 400))
        .with_overscan(3);
    view.toggle_group(&title("Today"));
    view.toggle_group(&title("Last Week"));

    let range = view.visible_range();

    assert_eq!(range.visible_end, FlatIndex::new(9));
    assert_eq!(range.end_index, FlatIndex::new(12));
    assert_eq!(range.start_index, FlatIndex::new(0));
}

#[test]
fn deselecting_one_record_after_select_all_leaves_group_partial() {
    let mut view = three_groups(FixedExtents::uniform(48));
    let today = title("Today");
    view.toggle_group(&today);
    let mut host = Recorder::default();

    assert!(view.dispatch(ListInput::ToggleGroupSelection(FlatIndex::new(0)), &mut host));
    assert_eq!(view.group_selection_status(&today), GroupSelectionStatus::All);

    view.dispatch(ListInput::ToggleSelection(FlatIndex::new(3)), &mut host);

    assert_eq!(view.group_selection_status(&today), GroupSelectionStatus::Some);
    assert_eq!(host.bulk.len(), 1);
    assert_eq!(host.bulk[0].len(), 5);
}

#[test]
fn selection_survives_collapse_and_expand() {
    let mut view = three_groups(FixedExtents::uniform(48));
    let today = title("Today");
    view.toggle_group(&today);
    view.dispatch(ListInput::ToggleSelection(FlatIndex::new(2)), &mut NoopHost);

    view.toggle_group(&today);
    view.toggle_group(&today);

    assert!(view.is_selected(TranscriptId::new(2)));
    assert_eq!(view.group_selection_status(&today), GroupSelectionStatus::Some);
}

#[test]
fn empty_group_selection_is_none_and_bulk_toggle_is_silent() {
    let mut view = three_groups(FixedExtents::uniform(48));
    let mut host = Recorder::default();

    view.dispatch(ListInput::ToggleGroupSelection(FlatIndex::new(1)), &mut host);

    assert_eq!(view.group_selection_status(&title("Yesterday")), GroupSelectionStatus::None);
    assert!(host.bulk.is_empty());
}

#[test]
fn toggling_a_header_reports_the_new_generation() {
    let mut view = three_groups(FixedExtents::uniform(48));
    let mut host = Recorder::default();
    let before = view.generation();

    view.dispatch(ListInput::Activate(FlatIndex::new(2)), &mut host);

    assert_eq!(
        host.invalidations,
        vec![LayoutInvalidation {
            first_affected: FlatIndex::new(2),
            generation: before + 1,
        }]
    );
}

#[test]
fn offsets_follow_expand_and_collapse() {
    let mut view = three_groups(FixedExtents::new(32, 48));
    assert_eq!(view.total_extent(), 96);

    view.toggle_group(&title("Today"));
    assert_eq!(view.total_extent(), 32 * 3 + 48 * 5);
    assert_eq!(view.offset_of(FlatIndex::new(6)), Some(Offset::new(32 + 48 * 5)));

    view.toggle_group(&title("Today"));
    assert_eq!(view.total_extent(), 96);
    assert_eq!(view.offset_of(FlatIndex::new(2)), Some(Offset::new(64)));
}

#[test]
fn measured_extents_shift_later_offsets() {
    let mut view = three_groups(FixedExtents::uniform(48));
    view.toggle_group(&title("Today"));

    assert!(view.set_measured_extent(FlatIndex::new(1), Extent::new(100)));

    assert_eq!(view.size_of(FlatIndex::new(1)), Some(Extent::new(100)));
    assert_eq!(view.offset_of(FlatIndex::new(2)), Some(Offset::new(148)));
    assert!(!view.set_measured_extent(FlatIndex::new(99), Extent::new(1)));
}

#[test]
fn index_at_offset_inverts_offset_of() {
    let mut view = three_groups(FixedExtents::new(20, 30));
    view.toggle_group(&title("Last Week"));

    for i in 0..view.len() {
        let index = FlatIndex::new(i);
        let top = view.offset_of(index).expect("in range");
        assert_eq!(view.index_at_offset(top), Some(index));
    }
    assert_eq!(view.index_at_offset(Offset::new(u64::MAX)), Some(FlatIndex::new(view.len() - 1)));
}

#[test]
fn clicks_hit_the_item_under_the_pointer() {
    let mut view = three_groups(FixedExtents::uniform(48)).with_viewport(ViewportDimensions::new(320, 400));
    let mut host = Recorder::default();
    view.toggle_group(&title("Today"));

    assert!(view.dispatch(ListInput::Click { y: 100 }, &mut host));
    assert_eq!(host.opened, vec![TranscriptId::new(2)]);

    // Below the last item
    assert!(!view.dispatch(ListInput::Click { y: 399 }, &mut host));
}

#[test]
fn delete_request_carries_the_host_display_value() {
    let mut view = three_groups(FixedExtents::uniform(48));
    let mut host = Recorder::default();
    view.toggle_group(&title("Today"));

    assert!(view.dispatch(ListInput::RequestDelete(FlatIndex::new(1)), &mut host));
    assert!(!view.dispatch(ListInput::RequestDelete(FlatIndex::new(0)), &mut host));

    assert_eq!(host.deletes, vec![(TranscriptId::new(1), "#1 note".to_string())]);
}

#[test]
fn reusing_the_same_groups_is_not_a_structural_change() {
    let shared: std::sync::Arc<[Group]> = groups(&[("Today", 2)]).into();
    let mut view = GroupedListView::new(std::sync::Arc::clone(&shared), FixedExtents::default());
    let generation = view.generation();

    assert_eq!(view.set_groups(shared), None);
    assert_eq!(view.generation(), generation);

    let replaced = view.set_groups(groups(&[("Today", 2)]));
    assert!(replaced.is_some());
    assert_eq!(view.generation(), generation + 1);
}

#[test]
fn scroll_to_bottom_then_up_stays_in_bounds() {
    let mut view = three_groups(FixedExtents::uniform(48)).with_viewport(ViewportDimensions::new(320, 400));
    view.toggle_group(&title("Last Week"));
    let max = view.total_extent() - 400;

    view.scroll_to(ScrollPosition::Bottom);
    assert_eq!(view.scroll_offset(), Offset::new(max));

    assert_eq!(view.scroll_by(-10_000), Offset::new(0));
    assert_eq!(view.scroll_by(10_000), Offset::new(max));
}

#[test]
fn rendering_visits_each_materialized_item_once_in_order() {
    let mut view = three_groups(FixedExtents::uniform(48))
        .with_viewport(ViewportDimensions::new(320, 200))
        .with_overscan(1);
    view.toggle_group(&title("Last Week"));
    view.scroll_to(ScrollPosition::at_offset(240));

    let mut seen = Vec::new();
    let range = view.render_visible(|index, _item, style| seen.push((index, style.on_screen)));

    let expected: Vec<_> = range.indices().collect();
    assert_eq!(seen.iter().map(|(i, _)| *i).collect::<Vec<_>>(), expected);
    assert!(!seen.first().expect("non-empty").1);
    assert!(!seen.last().expect("non-empty").1);
}
