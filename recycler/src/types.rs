/// Where to place an item when computing a scroll-to offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

/// A two-axis size where `main` is the scroll axis (height for a vertical list) and `cross` the
/// other axis (width).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub main: f32,
    pub cross: f32,
}

impl Extent {
    pub fn new(main: f32, cross: f32) -> Self {
        Self { main, cross }
    }
}

/// The contiguous index range `[first_index, first_index + capacity)` eligible for binding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub first_index: usize,
    pub capacity: usize,
}

impl Window {
    pub const EMPTY: Self = Self {
        first_index: 0,
        capacity: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// One past the last index in the window.
    pub fn end_index(&self) -> usize {
        self.first_index.saturating_add(self.capacity)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.first_index && index < self.end_index()
    }
}
