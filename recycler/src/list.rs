use crate::binding::{BindLayout, BindingReport, SlotBindingManager};
use crate::extent::{ExtentResolver, approx_eq, measure_prototype};
use crate::layout::LayoutSource;
use crate::pool::SlotPool;
use crate::scheduler::{Trigger, UpdateScheduler, UpdateState};
use crate::slot::{SlotFactory, SlotHandle};
use crate::window::{ScrollGate, clamp_scroll_offset, compute_window};
use crate::{Align, ItemRealizedCallback, ListError, ListOptions, ListState, Window};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Active,
    Suspended,
    TornDown,
}

/// A headless virtualized list that recycles a bounded set of view slots.
///
/// The host supplies a [`SlotFactory`] and a [`LayoutSource`], then calls [`Self::tick`] once per
/// frame. Every other entry point (`on_scroll`, setters, `invalidate`) only records that work is
/// pending; the window is recomputed and slots are rebound inside `tick`, so bursts of triggers
/// cost one pass.
///
/// The engine is single-threaded and never blocks.
pub struct VirtualList<H> {
    options: ListOptions,
    extent: ExtentResolver,
    scheduler: UpdateScheduler,
    gate: ScrollGate,
    window: Window,
    last_report: BindingReport,
    content_extent: f32,

    pool: Option<SlotPool<H>>,
    bindings: SlotBindingManager<H>,
    layout: Option<Box<dyn LayoutSource>>,
    on_item_realized: Option<ItemRealizedCallback<H>>,

    phase: Phase,
    last_viewport_main: f32,
    last_cross_extent: f32,
    last_item_extent: f32,
}

impl<H: SlotHandle> VirtualList<H> {
    pub fn new(options: ListOptions) -> Self {
        let extent = ExtentResolver::new(options.item_extent, options.desired_visible_count);
        rdebug!(
            total_count = options.total_count,
            item_extent = extent.item_extent(),
            buffer_size = options.buffer_size,
            "VirtualList::new"
        );
        Self {
            options: ListOptions {
                item_extent: extent.item_extent(),
                ..options
            },
            gate: ScrollGate::new(options.update_threshold),
            scheduler: UpdateScheduler::new(),
            window: Window::EMPTY,
            last_report: BindingReport::default(),
            content_extent: 0.0,
            pool: None,
            bindings: SlotBindingManager::new(),
            layout: None,
            on_item_realized: None,
            phase: Phase::Idle,
            last_viewport_main: 0.0,
            last_cross_extent: 0.0,
            last_item_extent: extent.item_extent(),
            extent,
        }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Sets the factory slots are created from.
    ///
    /// Replacing an existing factory destroys every slot made by the previous one.
    pub fn set_slot_factory(&mut self, factory: impl SlotFactory<H> + 'static) {
        if self.phase == Phase::TornDown {
            rwarn!("set_slot_factory after teardown is ignored");
            return;
        }
        if let Some(mut old) = self.pool.take() {
            self.bindings.release_all(&mut old);
            old.drain_all();
            rdebug!("slot factory replaced");
            self.window = Window::EMPTY;
            self.gate.reset();
        }
        self.pool = Some(SlotPool::new(factory));
        self.scheduler.mark(Trigger::Invalidate);
    }

    pub fn set_layout_source(&mut self, layout: impl LayoutSource + 'static) {
        if self.phase == Phase::TornDown {
            rwarn!("set_layout_source after teardown is ignored");
            return;
        }
        self.layout = Some(Box::new(layout));
        if self.is_initialized() {
            self.refresh_item_extent();
            self.update_content_extent();
        }
        self.scheduler.mark(Trigger::Resize);
    }

    /// Registers the sink for binding notifications. Already bound slots are not replayed.
    pub fn set_on_item_realized(&mut self, f: Option<impl FnMut(&mut H, usize) + 'static>) {
        self.on_item_realized = f.map(|f| Box::new(f) as _);
    }

    /// One-time setup. Calling it again is a no-op.
    ///
    /// Fails when a collaborator is missing; the list then stays inert and may be initialized
    /// again once the collaborator is set.
    pub fn initialize(&mut self) -> Result<(), ListError> {
        match self.phase {
            Phase::Active | Phase::Suspended => return Ok(()),
            Phase::TornDown => return Err(ListError::TornDown),
            Phase::Idle => {}
        }
        if self.pool.is_none() {
            rwarn!("initialize: no slot factory");
            return Err(ListError::MissingSlotFactory);
        }
        if self.layout.is_none() {
            rwarn!("initialize: no layout source");
            return Err(ListError::MissingLayoutSource);
        }

        self.refresh_item_extent();
        self.update_content_extent();
        self.phase = Phase::Active;
        self.scheduler.mark(Trigger::Invalidate);
        rdebug!(
            total_count = self.options.total_count,
            item_extent = self.extent.item_extent(),
            "initialize"
        );
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.phase, Phase::Active | Phase::Suspended)
    }

    pub fn is_suspended(&self) -> bool {
        self.phase == Phase::Suspended
    }

    pub fn is_torn_down(&self) -> bool {
        self.phase == Phase::TornDown
    }

    /// Stops reacting to scroll notifications and skips ticks until [`Self::resume`].
    pub fn suspend(&mut self) {
        if self.phase == Phase::Active {
            self.phase = Phase::Suspended;
            rdebug!("suspend");
        }
    }

    /// Re-subscribes to scrolling and forces a full rebuild on the next tick.
    pub fn resume(&mut self) {
        if self.phase == Phase::Suspended {
            self.phase = Phase::Active;
            self.scheduler.mark(Trigger::Invalidate);
            rdebug!("resume");
        }
    }

    /// Releases every slot, destroys the pool and drops all collaborators.
    ///
    /// No callbacks fire afterwards. Calling it twice is a no-op.
    pub fn teardown(&mut self) {
        if self.phase == Phase::TornDown {
            return;
        }
        rdebug!(
            reserved = self.reserved_count(),
            pooled = self.pooled_count(),
            "teardown"
        );
        if let Some(mut pool) = self.pool.take() {
            self.bindings.release_all(&mut pool);
            pool.drain_all();
        }
        self.layout = None;
        self.on_item_realized = None;
        self.window = Window::EMPTY;
        self.gate.reset();
        self.scheduler.take();
        self.phase = Phase::TornDown;
    }

    /// Scroll notification from the host's scroll container.
    pub fn on_scroll(&mut self) {
        if self.phase == Phase::Active {
            self.scheduler.mark(Trigger::Scroll);
        }
    }

    /// Forces the next tick to rebind every slot regardless of the scroll threshold.
    pub fn invalidate(&mut self) {
        self.scheduler.mark(Trigger::Invalidate);
    }

    pub fn total_count(&self) -> usize {
        self.options.total_count
    }

    /// Updates the list length. A length of zero releases every bound slot on the next tick
    /// while keeping the pool warm.
    pub fn set_total_count(&mut self, count: usize) {
        if self.options.total_count == count {
            return;
        }
        rdebug!(from = self.options.total_count, to = count, "set_total_count");
        self.options.total_count = count;
        if self.is_initialized() {
            self.update_content_extent();
        }
        self.scheduler.mark(Trigger::TotalCountChanged);
    }

    pub fn visible_item_count(&self) -> usize {
        self.extent.desired_visible_count()
    }

    /// `count > 0` locks the item extent to `viewport / count`; `0` reverts to the measured
    /// prototype extent.
    pub fn set_visible_item_count(&mut self, count: usize) {
        rdebug!(count, "set_visible_item_count");
        self.options.desired_visible_count = count;
        self.extent.set_desired_visible_count(count);
        if self.is_initialized() {
            self.refresh_item_extent();
            self.update_content_extent();
        }
        self.scheduler.mark(Trigger::ExtentChanged);
    }

    pub fn item_extent(&self) -> f32 {
        self.extent.item_extent()
    }

    /// Overrides the item extent.
    ///
    /// While a visible-count lock is set, the extent is re-resolved against the viewport right
    /// away, so the override only sticks when there is no viewport extent yet.
    pub fn set_item_extent(&mut self, extent: f32) {
        if !self.extent.set_item_extent(extent) {
            return;
        }
        self.options.item_extent = self.extent.item_extent();
        if self.is_initialized() {
            if self.extent.is_locked() {
                self.refresh_item_extent();
            }
            self.update_content_extent();
        }
        self.scheduler.mark(Trigger::ExtentChanged);
    }

    pub fn set_buffer_size(&mut self, buffer_size: usize) {
        if self.options.buffer_size == buffer_size {
            return;
        }
        self.options.buffer_size = buffer_size;
        self.scheduler.mark(Trigger::Invalidate);
    }

    pub fn set_update_threshold(&mut self, threshold: f32) {
        self.options.update_threshold = threshold;
        self.gate.set_threshold(threshold);
    }

    /// Clones the current options, applies `f`, then routes every changed field through its
    /// setter so the right triggers are raised.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ListOptions)) {
        let prev = self.options;
        let mut next = prev;
        f(&mut next);

        if next.desired_visible_count != prev.desired_visible_count {
            self.set_visible_item_count(next.desired_visible_count);
        }
        if !approx_eq(next.item_extent, prev.item_extent) {
            self.set_item_extent(next.item_extent);
        }
        if next.total_count != prev.total_count {
            self.set_total_count(next.total_count);
        }
        if next.buffer_size != prev.buffer_size {
            self.set_buffer_size(next.buffer_size);
        }
        if !approx_eq(next.update_threshold, prev.update_threshold) {
            self.set_update_threshold(next.update_threshold);
        }
    }

    /// Advances the list by one frame.
    ///
    /// Picks up layout changes, then, if anything is pending, recomputes the window and
    /// reconciles slots. Returns the window when a reconciliation pass ran.
    pub fn tick(&mut self) -> Option<Window> {
        if self.phase != Phase::Active {
            return None;
        }
        self.track_layout_changes();
        let force = self.scheduler.take()?;
        self.refresh(force)
    }

    pub fn update_state(&self) -> UpdateState {
        self.scheduler.state()
    }

    /// The window slots were last reconciled against.
    pub fn window(&self) -> Window {
        self.window
    }

    /// What the most recent reconciliation pass did.
    pub fn last_report(&self) -> BindingReport {
        self.last_report
    }

    /// Total scrollable extent along the main axis.
    pub fn content_extent(&self) -> f32 {
        self.content_extent
    }

    pub fn active_count(&self) -> usize {
        self.bindings.active_count()
    }

    pub fn reserved_count(&self) -> usize {
        self.bindings.reserved_count()
    }

    pub fn pooled_count(&self) -> usize {
        self.pool.as_ref().map_or(0, SlotPool::len)
    }

    /// Handles ever created by the current factory.
    pub fn created_count(&self) -> usize {
        self.pool.as_ref().map_or(0, SlotPool::created)
    }

    pub fn state(&self) -> ListState {
        ListState {
            window: self.window,
            item_extent: self.extent.item_extent(),
            content_extent: self.content_extent,
            active: self.active_count(),
            reserved: self.reserved_count(),
            pooled: self.pooled_count(),
            update: self.scheduler.state(),
        }
    }

    /// Visits bound slots in ascending index order.
    pub fn for_each_active(&self, f: impl FnMut(usize, &H)) {
        self.bindings.for_each_active(f);
    }

    pub fn index_at_offset(&self, offset: f32) -> Option<usize> {
        let count = self.options.total_count;
        if count == 0 {
            return None;
        }
        let offset = offset.abs();
        if offset.is_nan() {
            return Some(0);
        }
        let index = (offset / self.extent.item_extent()).floor() as usize;
        Some(index.min(count - 1))
    }

    /// Start of `index` along the main axis, measured from the top of the content.
    pub fn item_offset(&self, index: usize) -> Option<f32> {
        (index < self.options.total_count).then(|| index as f32 * self.extent.item_extent())
    }

    /// Computes the (clamped) scroll offset that brings `index` into view.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> f32 {
        let count = self.options.total_count;
        if count == 0 {
            return 0.0;
        }
        let (view, current) = match self.layout.as_ref() {
            Some(layout) => (layout.viewport().main.max(0.0), layout.scroll_offset()),
            None => (self.last_viewport_main.max(0.0), 0.0),
        };
        let extent = self.extent.item_extent();
        let current = clamp_scroll_offset(current, extent, view, count);

        let index = index.min(count - 1);
        let start = index as f32 * extent;
        let end = start + extent;

        let target = match align {
            Align::Start => start,
            Align::End => end - view,
            Align::Center => start + extent / 2.0 - view / 2.0,
            Align::Auto => {
                if start >= current && end <= current + view {
                    current
                } else if start < current {
                    start
                } else {
                    end - view
                }
            }
        };

        clamp_scroll_offset(target.max(0.0), extent, view, count)
    }

    fn track_layout_changes(&mut self) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let viewport_main = layout.viewport().main;
        let cross = layout.content_cross_extent();

        if !approx_eq(viewport_main, self.last_viewport_main) {
            self.last_viewport_main = viewport_main;
            if self.extent.is_locked() {
                self.refresh_item_extent();
                self.update_content_extent();
            }
            self.scheduler.mark(Trigger::Resize);
        }

        if !approx_eq(cross, self.last_cross_extent) {
            self.last_cross_extent = cross;
            self.scheduler.mark(Trigger::Resize);
        }

        let item_extent = self.extent.item_extent();
        if !approx_eq(item_extent, self.last_item_extent) {
            self.last_item_extent = item_extent;
            self.scheduler.mark(Trigger::ExtentChanged);
        }
    }

    fn refresh(&mut self, force: bool) -> Option<Window> {
        let (viewport_main, scroll_offset, cross_extent) = {
            let layout = self.layout.as_ref()?;
            (
                layout.viewport().main.max(0.0),
                layout.scroll_offset(),
                layout.content_cross_extent(),
            )
        };
        let pool = self.pool.as_mut()?;

        let total_count = self.options.total_count;
        if total_count == 0 {
            rtrace!(
                released = self.bindings.reserved_count(),
                "empty list; releasing all slots"
            );
            self.bindings.release_all(pool);
            self.window = Window::EMPTY;
            self.last_report = BindingReport::default();
            self.gate.reset();
            return Some(self.window);
        }

        let item_extent = self.extent.item_extent();
        let offset = clamp_scroll_offset(scroll_offset, item_extent, viewport_main, total_count);
        let layout = BindLayout {
            total_count,
            item_extent,
            cross_extent,
        };
        let moved = self.gate.moved_enough(offset, item_extent);
        if !moved && !force {
            // Positions the factory could not fill last time are retried against the same window.
            if self.bindings.reserved_count() >= self.window.capacity {
                return None;
            }
            let window = self.window;
            self.last_report = reconcile(
                &mut self.bindings,
                &mut self.on_item_realized,
                window,
                layout,
                false,
                pool,
            );
            rtrace!(
                realized = self.last_report.realized,
                missing = self.last_report.missing,
                "refilled unbound positions"
            );
            return Some(window);
        }

        let window = compute_window(
            offset,
            item_extent,
            viewport_main,
            self.options.buffer_size,
            total_count,
        );
        self.gate.record(offset);

        self.last_report = reconcile(
            &mut self.bindings,
            &mut self.on_item_realized,
            window,
            layout,
            force,
            pool,
        );
        self.window = window;

        rtrace!(
            first_index = window.first_index,
            capacity = window.capacity,
            force,
            realized = self.last_report.realized,
            released = self.last_report.released,
            missing = self.last_report.missing,
            "reconciled"
        );
        Some(window)
    }

    /// Re-resolves the item extent; a change forces a full rebuild.
    fn refresh_item_extent(&mut self) -> bool {
        let Some(layout) = self.layout.as_ref() else {
            return false;
        };
        let viewport_main = layout.viewport().main;
        let measured = if self.extent.is_locked() {
            0.0
        } else {
            measure_prototype(
                layout.prototype_extent(),
                layout.preferred_prototype_extent(),
            )
        };

        let changed = self.extent.resolve(viewport_main, measured);
        if changed {
            self.options.item_extent = self.extent.item_extent();
            self.scheduler.mark(Trigger::ExtentChanged);
            rdebug!(item_extent = self.extent.item_extent(), "item extent resolved");
        }
        changed
    }

    fn update_content_extent(&mut self) {
        let total = self.extent.total_extent(self.options.total_count);
        self.content_extent = total;
        if let Some(layout) = self.layout.as_mut() {
            layout.apply_content_extent(total);
        }
    }
}

fn reconcile<H: SlotHandle>(
    bindings: &mut SlotBindingManager<H>,
    on_item_realized: &mut Option<ItemRealizedCallback<H>>,
    window: Window,
    layout: BindLayout,
    force: bool,
    pool: &mut SlotPool<H>,
) -> BindingReport {
    bindings.reconcile(window, layout, force, pool, |handle, index| {
        if let Some(cb) = on_item_realized.as_mut() {
            cb(handle, index);
        }
    })
}

impl<H> core::fmt::Debug for VirtualList<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualList")
            .field("options", &self.options)
            .field("phase", &self.phase)
            .field("window", &self.window)
            .field("content_extent", &self.content_extent)
            .field("update", &self.scheduler.state())
            .finish_non_exhaustive()
    }
}
