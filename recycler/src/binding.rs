use crate::Window;
use crate::pool::SlotPool;
use crate::slot::{Slot, SlotHandle};

/// Geometry a reconciliation pass lays slots out with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BindLayout {
    pub total_count: usize,
    pub item_extent: f32,
    pub cross_extent: f32,
}

/// What a reconciliation pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BindingReport {
    /// Slots (re)bound, one item-realized notification each.
    pub realized: usize,
    /// Slots returned to the pool because capacity shrank.
    pub released: usize,
    /// Positions left empty because the factory produced nothing.
    pub missing: usize,
}

/// Keeps one slot per window position and rebinds them as the window moves.
///
/// Position `i` always shows index `first_index + i`. Slots past the end of the list stay
/// reserved but hidden; only a capacity shrink returns slots to the pool.
#[derive(Debug)]
pub struct SlotBindingManager<H> {
    slots: Vec<Slot<H>>,
}

impl<H: SlotHandle> SlotBindingManager<H> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Slots held at a window position, bound or not.
    pub fn reserved_count(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    pub fn slots(&self) -> &[Slot<H>] {
        &self.slots
    }

    /// Visits bound slots in position order.
    pub fn for_each_active(&self, mut f: impl FnMut(usize, &H)) {
        for slot in &self.slots {
            if !slot.is_active() {
                continue;
            }
            if let Some(index) = slot.bound_index() {
                f(index, slot.handle());
            }
        }
    }

    pub fn reconcile(
        &mut self,
        window: Window,
        layout: BindLayout,
        force: bool,
        pool: &mut SlotPool<H>,
        mut on_realized: impl FnMut(&mut H, usize),
    ) -> BindingReport {
        let mut report = BindingReport::default();
        let capacity = window.capacity;

        if self.slots.len() > capacity {
            for slot in self.slots.drain(capacity..).rev() {
                pool.release(slot);
                report.released += 1;
            }
        }

        while self.slots.len() < capacity {
            let Some(slot) = pool.acquire() else {
                report.missing = capacity - self.slots.len();
                rwarn!(
                    missing = report.missing,
                    capacity,
                    "slot factory exhausted; positions left unbound until the next pass"
                );
                break;
            };
            self.slots.push(slot);
        }

        for (position, slot) in self.slots.iter_mut().enumerate() {
            let target = window.first_index + position;
            if target >= layout.total_count {
                slot.deactivate();
                continue;
            }
            if force || !slot.is_active() || slot.bound_index() != Some(target) {
                slot.bind(target, layout.item_extent, layout.cross_extent);
                on_realized(slot.handle_mut(), target);
                report.realized += 1;
            }
        }

        report
    }

    /// Returns every reserved slot to the pool. Returns how many were released.
    pub fn release_all(&mut self, pool: &mut SlotPool<H>) -> usize {
        let n = self.slots.len();
        for slot in self.slots.drain(..).rev() {
            pool.release(slot);
        }
        n
    }
}

impl<H: SlotHandle> Default for SlotBindingManager<H> {
    fn default() -> Self {
        Self::new()
    }
}
