use crate::slot::{Slot, SlotFactory, SlotHandle};

/// A LIFO free list of slots backed by a [`SlotFactory`].
///
/// The most recently released slot is handed out first.
pub struct SlotPool<H> {
    free: Vec<Slot<H>>,
    factory: Box<dyn SlotFactory<H>>,
    created: usize,
}

impl<H: SlotHandle> SlotPool<H> {
    pub fn new(factory: impl SlotFactory<H> + 'static) -> Self {
        Self::from_boxed(Box::new(factory))
    }

    pub fn from_boxed(factory: Box<dyn SlotFactory<H>>) -> Self {
        Self {
            free: Vec::new(),
            factory,
            created: 0,
        }
    }

    /// Number of free slots.
    pub fn len(&self) -> usize {
        self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    /// Number of handles ever obtained from the factory.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Pops a free slot, or asks the factory for a new one. The slot comes back active.
    pub fn acquire(&mut self) -> Option<Slot<H>> {
        let mut slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                let handle = self.factory.create_slot()?;
                self.created = self.created.saturating_add(1);
                Slot::new(handle)
            }
        };
        slot.activate();
        Some(slot)
    }

    pub fn release(&mut self, mut slot: Slot<H>) {
        slot.deactivate();
        self.free.push(slot);
    }

    /// Destroys every free slot through the factory. Returns how many were destroyed.
    pub fn drain_all(&mut self) -> usize {
        let n = self.free.len();
        while let Some(slot) = self.free.pop() {
            self.factory.destroy_slot(slot.into_handle());
        }
        n
    }
}

impl<H> core::fmt::Debug for SlotPool<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SlotPool")
            .field("free", &self.free.len())
            .field("created", &self.created)
            .finish_non_exhaustive()
    }
}
