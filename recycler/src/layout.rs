use std::rc::Rc;
use std::cell::RefCell;

use crate::Extent;

/// Per-tick measurements supplied by the host's scroll container.
pub trait LayoutSource {
    /// Viewport size; `main` is the scroll axis.
    fn viewport(&self) -> Extent;

    /// Current scroll offset along the main axis. The sign is ignored.
    fn scroll_offset(&self) -> f32;

    /// Cross-axis extent of the scroll content; slots are stretched to it.
    fn content_cross_extent(&self) -> f32;

    /// Natural main-axis extent of a reference item, or `0.0` if unknown.
    fn prototype_extent(&self) -> f32 {
        0.0
    }

    /// Layout-preferred extent of the reference item, consulted when the natural extent is not
    /// positive.
    fn preferred_prototype_extent(&self) -> Option<f32> {
        None
    }

    /// Receives the total scrollable extent whenever it changes.
    fn apply_content_extent(&mut self, _main: f32) {}
}

impl<T: LayoutSource> LayoutSource for Rc<RefCell<T>> {
    fn viewport(&self) -> Extent {
        self.borrow().viewport()
    }

    fn scroll_offset(&self) -> f32 {
        self.borrow().scroll_offset()
    }

    fn content_cross_extent(&self) -> f32 {
        self.borrow().content_cross_extent()
    }

    fn prototype_extent(&self) -> f32 {
        self.borrow().prototype_extent()
    }

    fn preferred_prototype_extent(&self) -> Option<f32> {
        self.borrow().preferred_prototype_extent()
    }

    fn apply_content_extent(&mut self, main: f32) {
        self.borrow_mut().apply_content_extent(main);
    }
}
