//! Core view-state newtypes

/// Extent of a single flat item along the scroll axis (pixels, or cells in a terminal).
///
/// Zero is legal: a zero-extent item occupies an offset but never covers one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Extent(u32);

impl Extent {
    pub const ZERO: Self = Self(0);

    pub fn new(extent: u32) -> Self {
        Self(extent)
    }

    /// Get the raw u32 value.
    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Extent {
    fn from(extent: u32) -> Self {
        Self(extent)
    }
}

/// Absolute offset from the top of the list content. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Offset(u64);

impl Offset {
    /// Create a new Offset from a raw value.
    pub fn new(offset: u64) -> Self {
        Self(offset)
    }

    /// Get the raw u64 value.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// Add an extent to this offset, saturating at u64::MAX.
    pub fn saturating_add(&self, amount: u64) -> Self {
        Self(self.0.saturating_add(amount))
    }

    /// Subtract an amount from this offset, saturating at 0.
    pub fn saturating_sub(&self, amount: u64) -> Self {
        Self(self.0.saturating_sub(amount))
    }

    /// Offset of the far edge of an item starting here.
    pub fn end_of(&self, extent: Extent) -> Self {
        self.saturating_add(u64::from(extent.get()))
    }
}

impl From<u64> for Offset {
    fn from(offset: u64) -> Self {
        Self(offset)
    }
}

/// Index into the flattened header/row sequence. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FlatIndex(usize);

impl FlatIndex {
    /// Create a new FlatIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the next index.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the previous index, saturating at 0.
    pub fn prev(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Clamp into `[0, len)`. Returns `None` when `len == 0`.
    pub fn clamp_to(&self, len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Self(self.0.min(len - 1)))
        }
    }
}

impl From<usize> for FlatIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Viewport geometry as measured by the host layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportDimensions {
    /// Width along the cross axis.
    pub width: u32,
    /// Height along the scroll axis.
    pub height: u32,
}

impl ViewportDimensions {
    /// Create new viewport dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A viewport with either dimension zero materializes nothing.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
