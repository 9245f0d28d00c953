use crate::Window;
use crate::extent::{MIN_EXTENT, total_extent};

/// Fraction of an item extent the scroll offset must travel before the window is recomputed.
pub const UPDATE_THRESHOLD: f32 = 0.3;

const MIN_VIEWPORT: f32 = 0.0001;

/// Computes the window of indexes to bind for a scroll position.
///
/// Pure: the same inputs always produce the same window.
pub fn compute_window(
    scroll_offset: f32,
    item_extent: f32,
    viewport_extent: f32,
    buffer_size: usize,
    total_count: usize,
) -> Window {
    if total_count == 0 {
        return Window::EMPTY;
    }

    let item_extent = item_extent.max(MIN_EXTENT);
    let viewport = viewport_extent.max(MIN_VIEWPORT);

    let items_that_fit = ((viewport / item_extent).ceil() as usize).max(1);
    let capacity = items_that_fit
        .saturating_add(buffer_size.saturating_mul(2))
        .clamp(1, total_count);

    let offset = clamp_scroll_offset(
        scroll_offset,
        item_extent,
        viewport_extent.max(0.0),
        total_count,
    );
    let leading = (offset / item_extent).floor() as usize;
    let first_index = leading
        .saturating_sub(buffer_size)
        .min(total_count - capacity);

    Window {
        first_index,
        capacity,
    }
}

/// Clamps `|scroll_offset|` into `[0, max(0, total_extent - viewport_extent)]`.
pub fn clamp_scroll_offset(
    scroll_offset: f32,
    item_extent: f32,
    viewport_extent: f32,
    total_count: usize,
) -> f32 {
    let max = (total_extent(item_extent, total_count) - viewport_extent).max(0.0);
    let offset = scroll_offset.abs();
    if offset.is_nan() { 0.0 } else { offset.min(max) }
}

/// Suppresses window recomputation for sub-threshold scroll movement.
///
/// The buffer slots on either side of the viewport absorb the drift, so skipping a pass never
/// exposes an unbound row.
#[derive(Clone, Copy, Debug)]
pub struct ScrollGate {
    threshold: f32,
    last_offset: Option<f32>,
}

impl ScrollGate {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            last_offset: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold.max(0.0);
    }

    /// The offset the current window was computed for, if any.
    pub fn last_offset(&self) -> Option<f32> {
        self.last_offset
    }

    pub fn moved_enough(&self, offset: f32, item_extent: f32) -> bool {
        match self.last_offset {
            None => true,
            Some(last) => (offset - last).abs() >= item_extent * self.threshold,
        }
    }

    pub fn record(&mut self, offset: f32) {
        self.last_offset = Some(offset);
    }

    /// Forgets the last offset so the next pass always recomputes.
    pub fn reset(&mut self) {
        self.last_offset = None;
    }
}

impl Default for ScrollGate {
    fn default() -> Self {
        Self::new(UPDATE_THRESHOLD)
    }
}
