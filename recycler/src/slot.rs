use std::rc::Rc;
use std::cell::RefCell;

use crate::Extent;

/// The capability set the engine needs from a view object.
///
/// The engine never inspects the handle beyond these calls. Content binding happens in the
/// item-realized callback, which receives the handle mutably.
pub trait SlotHandle {
    /// Positions the slot along the scroll axis.
    fn set_offset(&mut self, main: f32);
    fn set_extent(&mut self, extent: Extent);
    fn set_visible(&mut self, visible: bool);
}

/// Supplies and reclaims the renderable objects behind slots.
pub trait SlotFactory<H> {
    /// Creates a new handle, or `None` if the host cannot provide one right now.
    fn create_slot(&mut self) -> Option<H>;
    fn destroy_slot(&mut self, slot: H);
}

impl<H, F: SlotFactory<H>> SlotFactory<H> for Rc<RefCell<F>> {
    fn create_slot(&mut self) -> Option<H> {
        self.borrow_mut().create_slot()
    }

    fn destroy_slot(&mut self, slot: H) {
        self.borrow_mut().destroy_slot(slot);
    }
}

/// A view handle plus the engine's bookkeeping for it.
#[derive(Debug)]
pub struct Slot<H> {
    handle: H,
    bound_index: Option<usize>,
    active: bool,
}

impl<H: SlotHandle> Slot<H> {
    pub(crate) fn new(handle: H) -> Self {
        Self {
            handle,
            bound_index: None,
            active: false,
        }
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub(crate) fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    pub(crate) fn into_handle(self) -> H {
        self.handle
    }

    /// The index this slot shows, or `None` while unbound.
    pub fn bound_index(&self) -> Option<usize> {
        self.bound_index
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn activate(&mut self) {
        if !self.active {
            self.active = true;
            self.handle.set_visible(true);
        }
    }

    /// Hides the slot and drops its binding.
    pub(crate) fn deactivate(&mut self) {
        self.bound_index = None;
        if self.active {
            self.active = false;
            self.handle.set_visible(false);
        }
    }

    pub(crate) fn bind(&mut self, index: usize, item_extent: f32, cross_extent: f32) {
        self.bound_index = Some(index);
        self.handle.set_offset(-(index as f32) * item_extent);
        self.handle
            .set_extent(Extent::new(item_extent, cross_extent.abs()));
        self.activate();
    }
}
