use crate::window::UPDATE_THRESHOLD;

pub const DEFAULT_TOTAL_COUNT: usize = 1000;
pub const DEFAULT_ITEM_EXTENT: f32 = 40.0;
pub const DEFAULT_BUFFER_SIZE: usize = 1;

/// A callback fired for every slot (re)bound to an index.
///
/// This is where the host populates the slot's content. Replacing the callback only affects
/// bindings made afterwards.
pub type ItemRealizedCallback<H> = Box<dyn FnMut(&mut H, usize)>;

/// Configuration for [`crate::VirtualList`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; missing fields fall
/// back to their defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ListOptions {
    pub total_count: usize,

    /// Main-axis extent of one item.
    ///
    /// Overwritten by the engine whenever the extent is re-resolved (from the visible-count
    /// lock or the prototype measurement).
    pub item_extent: f32,

    /// When non-zero, the item extent is locked to `viewport / desired_visible_count`.
    pub desired_visible_count: usize,

    /// Extra slots kept on each side of the viewport.
    pub buffer_size: usize,

    /// Fraction of `item_extent` the scroll offset must travel before the window is recomputed.
    pub update_threshold: f32,
}

impl ListOptions {
    pub fn new(total_count: usize, item_extent: f32) -> Self {
        Self {
            total_count,
            item_extent,
            ..Self::default()
        }
    }

    pub fn with_total_count(mut self, total_count: usize) -> Self {
        self.total_count = total_count;
        self
    }

    pub fn with_item_extent(mut self, item_extent: f32) -> Self {
        self.item_extent = item_extent;
        self
    }

    pub fn with_desired_visible_count(mut self, count: usize) -> Self {
        self.desired_visible_count = count;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_update_threshold(mut self, threshold: f32) -> Self {
        self.update_threshold = threshold;
        self
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            total_count: DEFAULT_TOTAL_COUNT,
            item_extent: DEFAULT_ITEM_EXTENT,
            desired_visible_count: 0,
            buffer_size: DEFAULT_BUFFER_SIZE,
            update_threshold: UPDATE_THRESHOLD,
        }
    }
}
