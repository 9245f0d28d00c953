//! A headless scroll surface and slot factory.
//!
//! Useful for demos, tests and for driving the engine from a host that has no widget tree of its
//! own (e.g. a terminal UI that renders `SimNode`s itself).

use recycler::{Extent, LayoutSource, SlotFactory, SlotHandle};

/// An in-memory scroll container.
///
/// Scrolling is clamped to `[0, content_extent - viewport.main]`, where `content_extent` is
/// whatever the engine last reported through [`LayoutSource::apply_content_extent`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimViewport {
    viewport: Extent,
    scroll_offset: f32,
    content_extent: f32,
    prototype_extent: f32,
    preferred_prototype_extent: Option<f32>,
}

impl SimViewport {
    pub fn new(viewport: Extent) -> Self {
        Self {
            viewport,
            scroll_offset: 0.0,
            content_extent: 0.0,
            prototype_extent: 0.0,
            preferred_prototype_extent: None,
        }
    }

    /// Sets the natural extent reported for the item prototype.
    pub fn with_prototype_extent(mut self, extent: f32) -> Self {
        self.prototype_extent = extent;
        self
    }

    pub fn with_preferred_prototype_extent(mut self, extent: Option<f32>) -> Self {
        self.preferred_prototype_extent = extent;
        self
    }

    pub fn set_viewport(&mut self, viewport: Extent) {
        self.viewport = viewport;
        self.scroll_offset = self.clamp(self.scroll_offset);
    }

    pub fn content_extent(&self) -> f32 {
        self.content_extent
    }

    pub fn max_scroll_offset(&self) -> f32 {
        (self.content_extent - self.viewport.main).max(0.0)
    }

    /// Scrolls to `offset`. Returns the applied (clamped) offset.
    pub fn scroll_to(&mut self, offset: f32) -> f32 {
        self.scroll_offset = self.clamp(offset);
        self.scroll_offset
    }

    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        self.scroll_to(self.scroll_offset + delta)
    }

    fn clamp(&self, offset: f32) -> f32 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll_offset())
    }
}

impl Default for SimViewport {
    fn default() -> Self {
        Self::new(Extent::new(200.0, 320.0))
    }
}

impl LayoutSource for SimViewport {
    fn viewport(&self) -> Extent {
        self.viewport
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn content_cross_extent(&self) -> f32 {
        self.viewport.cross
    }

    fn prototype_extent(&self) -> f32 {
        self.prototype_extent
    }

    fn preferred_prototype_extent(&self) -> Option<f32> {
        self.preferred_prototype_extent
    }

    fn apply_content_extent(&mut self, main: f32) {
        self.content_extent = main.max(0.0);
        self.scroll_offset = self.clamp(self.scroll_offset);
    }
}

/// A view handle that records what the engine did to it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimNode {
    pub id: usize,
    /// Main-axis position; rows grow downward, so index `i` sits at `-i * item_extent`.
    pub offset: f32,
    pub extent: Extent,
    pub visible: bool,
    /// Content written by the host's item-realized callback.
    pub label: Option<String>,
    /// Number of times the engine repositioned this node.
    pub moves: usize,
}

impl SimNode {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

impl SlotHandle for SimNode {
    fn set_offset(&mut self, main: f32) {
        self.offset = main;
        self.moves += 1;
    }

    fn set_extent(&mut self, extent: Extent) {
        self.extent = extent;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Creates [`SimNode`]s with sequential ids, optionally up to a fixed limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimNodeFactory {
    created: usize,
    destroyed: usize,
    limit: Option<usize>,
}

impl SimNodeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory that refuses to create more than `limit` nodes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
    }

    pub fn created(&self) -> usize {
        self.created
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    /// Nodes created and not yet destroyed.
    pub fn live(&self) -> usize {
        self.created - self.destroyed
    }
}

impl SlotFactory<SimNode> for SimNodeFactory {
    fn create_slot(&mut self) -> Option<SimNode> {
        if self.limit.is_some_and(|limit| self.created >= limit) {
            return None;
        }
        self.created += 1;
        Some(SimNode::new(self.created))
    }

    fn destroy_slot(&mut self, _slot: SimNode) {
        self.destroyed += 1;
    }
}
