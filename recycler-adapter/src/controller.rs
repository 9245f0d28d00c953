use recycler::{Align, ListError, ListOptions, SlotHandle, VirtualList};

/// A framework-neutral controller that wraps a `recycler::VirtualList` and provides common
/// adapter workflows (enable/disable lifecycle, scroll-to requests).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `set_enabled` when the host view is shown or hidden
/// - `on_scroll` when the scroll container reports movement
/// - `tick()` once per frame
///
/// A scroll-to request is not applied here: `tick()` hands the target offset back so the host can
/// move its real scroll container, which then reports the movement through `on_scroll`.
#[derive(Debug)]
pub struct Controller<H> {
    list: VirtualList<H>,
    pending_scroll: Option<f32>,
}

impl<H: SlotHandle> Controller<H> {
    pub fn new(options: ListOptions) -> Self {
        Self::from_list(VirtualList::new(options))
    }

    pub fn from_list(list: VirtualList<H>) -> Self {
        Self {
            list,
            pending_scroll: None,
        }
    }

    pub fn list(&self) -> &VirtualList<H> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut VirtualList<H> {
        &mut self.list
    }

    pub fn into_list(self) -> VirtualList<H> {
        self.list
    }

    /// Initializes the list if needed, then resumes or suspends it.
    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), ListError> {
        if !enabled {
            self.list.suspend();
            return Ok(());
        }
        if !self.list.is_initialized() {
            return self.list.initialize();
        }
        self.list.resume();
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.list.is_initialized() && !self.list.is_suspended()
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// This cancels any pending scroll-to request.
    pub fn on_scroll(&mut self) {
        self.pending_scroll = None;
        self.list.on_scroll();
    }

    pub fn pending_scroll(&self) -> Option<f32> {
        self.pending_scroll
    }

    pub fn cancel_scroll_request(&mut self) {
        self.pending_scroll = None;
    }

    /// Requests that `index` be scrolled into view.
    ///
    /// Returns the clamped target offset, which the next `tick()` hands back.
    pub fn request_scroll_to_index(&mut self, index: usize, align: Align) -> f32 {
        let to = self.list.scroll_to_index_offset(index, align);
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "recycler_adapter", index, to, "scroll request");
        self.pending_scroll = Some(to);
        to
    }

    /// Advances the list by one frame.
    ///
    /// Returns a pending scroll target for the host to apply, if one was requested.
    pub fn tick(&mut self) -> Option<f32> {
        if !self.is_enabled() {
            return None;
        }
        self.list.tick();
        self.pending_scroll.take()
    }

    /// Tears the list down. The controller stays inert afterwards.
    pub fn teardown(&mut self) {
        self.pending_scroll = None;
        self.list.teardown();
    }
}
