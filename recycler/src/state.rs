use crate::{UpdateState, Window};

/// A lightweight snapshot of the engine after the most recent tick.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListState {
    pub window: Window,
    pub item_extent: f32,
    /// Total scrollable extent (`total_count * item_extent`).
    pub content_extent: f32,
    /// Slots currently bound to an index and shown.
    pub active: usize,
    /// Slots held at a window position, bound or not.
    pub reserved: usize,
    /// Slots parked in the free list.
    pub pooled: usize,
    pub update: UpdateState,
}
