//! Semantic scroll position

use super::types::{FlatIndex, Offset};

/// Semantic scroll position within the flattened list.
///
/// A sum type that preserves scroll intent across layout changes:
/// - `Top`: Always shows from offset 0
/// - `Bottom`: Always shows the last extent of content
/// - `AtOffset`: Specific absolute offset
/// - `AtItem`: Keep a specific flat item at the top (survives relayout)
///
/// # Clamping Behavior
/// Every variant resolves into `[0, max(0, total - viewport_height)]`, so no
/// request can leave the viewport blank past the end of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPosition {
    /// View from the very top.
    #[default]
    Top,

    /// View from the very bottom.
    /// Resolves to: total - viewport_height (clamped to 0).
    Bottom,

    /// Specific offset from top.
    AtOffset(Offset),

    /// Keep a flat item at the top of the viewport.
    /// Resolves using the item's current offset; an index beyond the end
    /// resolves as `Bottom`.
    AtItem(FlatIndex),
}

impl ScrollPosition {
    /// Resolve to an absolute offset.
    ///
    /// `item_lookup` returns the offset of a flat index, or `None` if it is out
    /// of range.
    pub fn resolve<F>(&self, total: u64, viewport_height: u32, item_lookup: F) -> Offset
    where
        F: Fn(FlatIndex) -> Option<Offset>,
    {
        let max = total.saturating_sub(u64::from(viewport_height));
        let raw = match self {
            Self::Top => 0,
            Self::Bottom => max,
            Self::AtOffset(offset) => offset.get(),
            Self::AtItem(index) => item_lookup(*index).map_or(max, |o| o.get()),
        };
        Offset::new(raw.min(max))
    }

    /// Create AtOffset position.
    pub fn at_offset(offset: u64) -> Self {
        Self::AtOffset(Offset::new(offset))
    }
}
